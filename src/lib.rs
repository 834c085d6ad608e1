pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{
    agent::DeliveryAgent,
    sink::{MemorySink, OutputFormat, WriterSink},
};
pub use crate::app::{
    desk::{OrderDesk, PlacedOrder},
    session::{DeskCommand, Session, SessionSummary},
};
pub use crate::config::DeskConfig;
pub use crate::core::{
    dispatcher::{Action, CancelOrder, Command, OrderDispatcher, OrderService, PlaceOrder, Undo},
    fee::{FeeCalculator, FeeTier},
    notifier::Notifier,
};
pub use crate::domain::model::{ActionKind, Order, OrderCounter, OrderId};
pub use crate::domain::ports::{NotificationSink, Subscriber};
pub use crate::utils::error::{DeskError, Result};
