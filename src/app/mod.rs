pub mod desk;
pub mod session;
