use crate::domain::model::Order;
use crate::domain::ports::Subscriber;
use std::sync::Arc;

/// Fans new orders out to every registered subscriber.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber. The same handle may be registered more than once.
    pub fn register(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
        tracing::debug!("Registered subscriber #{}", self.subscribers.len());
    }

    /// Calls every subscriber in registration order. A panicking subscriber
    /// is not isolated from the rest.
    pub fn publish(&self, order: &Order) {
        tracing::debug!(
            "Publishing order #{} to {} subscribers",
            order.id,
            self.subscribers.len()
        );
        for subscriber in &self.subscribers {
            subscriber.notify(order);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
