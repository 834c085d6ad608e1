// Adapters layer: concrete subscribers and notification sinks.

pub mod agent;
pub mod sink;
