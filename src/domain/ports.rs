use crate::domain::model::Order;

/// Receives new-order events from the notifier.
pub trait Subscriber: Send + Sync {
    fn notify(&self, order: &Order);
}

/// Surfaces human readable messages. Plain text, no format contract.
pub trait NotificationSink: Send + Sync {
    fn render_notification(&self, text: &str);
}

