pub mod dispatcher;
pub mod fee;
pub mod notifier;

pub use crate::domain::model::{ActionKind, Order, OrderCounter, OrderId};
pub use crate::domain::ports::{NotificationSink, Subscriber};
