// Domain layer: order model and the ports the components talk through.

pub mod model;
pub mod ports;
