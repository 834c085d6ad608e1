use crate::domain::model::Order;
use crate::domain::ports::{NotificationSink, Subscriber};
use std::sync::Arc;

/// Subscriber that announces each new order under its own name.
pub struct DeliveryAgent {
    name: String,
    sink: Arc<dyn NotificationSink>,
}

impl DeliveryAgent {
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }
}

impl Subscriber for DeliveryAgent {
    fn notify(&self, order: &Order) {
        let msg = format!(
            "{} notified: New order #{} - {}",
            self.name,
            order.id,
            order.items.join(", ")
        );
        self.sink.render_notification(&msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::domain::model::OrderId;

    #[test]
    fn test_agent_message_format() {
        let sink = Arc::new(MemorySink::new());
        let agent = DeliveryAgent::new("Agent A", sink.clone());

        agent.notify(&Order::new(
            OrderId::new(1).unwrap(),
            vec!["Pizza".to_string(), "Coke".to_string()],
        ));

        assert_eq!(
            sink.lines(),
            vec!["Agent A notified: New order #1 - Pizza, Coke"]
        );
    }
}
