use crate::adapters::agent::DeliveryAgent;
use crate::config::DeskConfig;
use crate::core::dispatcher::{Action, OrderDispatcher, OrderService};
use crate::core::fee::{FeeCalculator, FeeTier};
use crate::core::notifier::Notifier;
use crate::domain::model::{Order, OrderCounter, OrderId};
use crate::domain::ports::{NotificationSink, Subscriber};
use std::sync::Arc;

/// Outcome of a place trigger, for the caller to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order: Order,
    pub tier: FeeTier,
    pub fee: u64,
}

/// Trigger layer: owns the order counter and drives notifier, fee
/// calculator and dispatcher in that order. The fee label is rendered
/// before the place command runs.
pub struct OrderDesk {
    counter: OrderCounter,
    notifier: Notifier,
    dispatcher: OrderDispatcher,
    display: Arc<dyn NotificationSink>,
    distance: u32,
    currency: String,
}

impl OrderDesk {
    /// Desk with no subscribers.
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        distance: u32,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            counter: OrderCounter::new(),
            notifier: Notifier::new(),
            dispatcher: OrderDispatcher::new(OrderService::new(sink.clone())),
            display: sink,
            distance,
            currency: currency.into(),
        }
    }

    /// Desk with one delivery agent per configured name.
    pub fn from_config(config: &DeskConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let mut desk = Self::new(sink.clone(), config.desk.distance, &config.desk.currency);
        for name in config.agent_names() {
            desk.register(Arc::new(DeliveryAgent::new(name, sink.clone())));
        }
        tracing::debug!(
            "Desk ready with {} agents, distance {}",
            desk.notifier.len(),
            desk.distance
        );
        desk
    }

    pub fn register(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.notifier.register(subscriber);
    }

    pub fn on_place_order_triggered(
        &mut self,
        items_text: &str,
        delivery_tier: &str,
    ) -> PlacedOrder {
        let order = Order::new(self.counter.next_id(), Order::parse_items(items_text));
        tracing::info!("🛒 Placing order #{} ({} items)", order.id, order.items.len());

        self.notifier.publish(&order);

        let tier = FeeTier::from_name(delivery_tier);
        if tier.as_str() != delivery_tier {
            tracing::warn!("Unknown delivery tier '{}', using free delivery", delivery_tier);
        }
        let fee = FeeCalculator::new(tier).fee(self.distance);
        self.display.render_notification(&self.fee_label(fee));

        self.dispatcher.execute(Action::place(order.clone()));

        PlacedOrder { order, tier, fee }
    }

    /// Cancels the most recently placed order. No-op before the first order.
    pub fn on_cancel_order_triggered(&mut self) -> Option<OrderId> {
        let Some(id) = self.counter.last_id() else {
            tracing::debug!("Cancel ignored, no order has been placed yet");
            return None;
        };
        tracing::info!("Canceling order #{}", id);
        self.dispatcher.execute(Action::cancel(Order::new(id, Vec::new())));
        Some(id)
    }

    /// Undoes the latest place that has not been undone yet.
    pub fn on_undo_triggered(&mut self) -> Option<OrderId> {
        let undone = self.dispatcher.undo_last();
        match undone {
            Some(id) => tracing::info!("↩️ Undid order #{}", id),
            None => tracing::debug!("Nothing to undo"),
        }
        undone
    }

    pub fn fee_label(&self, fee: u64) -> String {
        format!("Delivery Fee: {}{}", self.currency, fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    fn desk() -> (Arc<MemorySink>, OrderDesk) {
        let sink = Arc::new(MemorySink::new());
        let desk = OrderDesk::from_config(&DeskConfig::default(), sink.clone());
        (sink, desk)
    }

    #[test]
    fn test_place_order_flow() {
        let (sink, mut desk) = desk();

        let placed = desk.on_place_order_triggered("Pizza, Coke", "express");

        assert_eq!(placed.order.id.get(), 1);
        assert_eq!(placed.order.items, vec!["Pizza", "Coke"]);
        assert_eq!(placed.tier, FeeTier::Express);
        assert_eq!(placed.fee, 50);
        assert_eq!(
            sink.drain(),
            vec![
                "Agent A notified: New order #1 - Pizza, Coke",
                "Agent B notified: New order #1 - Pizza, Coke",
                "Delivery Fee: ₹50",
                "Order #1 placed.",
            ]
        );
    }

    #[test]
    fn test_unknown_tier_is_free() {
        let (_sink, mut desk) = desk();
        let placed = desk.on_place_order_triggered("Tea", "teleport");
        assert_eq!(placed.tier, FeeTier::Free);
        assert_eq!(placed.fee, 0);
    }

    #[test]
    fn test_empty_items_pass_through() {
        let (sink, mut desk) = desk();
        let placed = desk.on_place_order_triggered("", "standard");

        assert_eq!(placed.order.items, vec![""]);
        assert_eq!(placed.fee, 25);
        assert_eq!(sink.drain()[0], "Agent A notified: New order #1 - ");
    }

    #[test]
    fn test_cancel_before_any_order_is_silent() {
        let (sink, mut desk) = desk();
        assert_eq!(desk.on_cancel_order_triggered(), None);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_cancel_targets_latest_order() {
        let (sink, mut desk) = desk();
        desk.on_place_order_triggered("Pizza", "free");
        desk.on_place_order_triggered("Soup", "free");
        sink.drain();

        assert_eq!(desk.on_cancel_order_triggered().map(OrderId::get), Some(2));
        assert_eq!(desk.on_cancel_order_triggered().map(OrderId::get), Some(2));
        assert_eq!(sink.drain(), vec!["Order #2 canceled.", "Order #2 canceled."]);
    }

    #[test]
    fn test_fee_label() {
        let (_sink, desk) = desk();
        assert_eq!(desk.fee_label(50), "Delivery Fee: ₹50");
    }
}
