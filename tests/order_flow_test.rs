use orderdesk::{
    Action, DeskConfig, MemorySink, NotificationSink, Order, OrderDesk, OrderDispatcher, OrderId,
    OrderService, Subscriber,
};
use std::sync::{Arc, Mutex};

/// 記錄收到的訂單 id，用來驗證通知順序
struct Tally {
    label: &'static str,
    seen: Arc<Mutex<Vec<(&'static str, u64)>>>,
}

impl Subscriber for Tally {
    fn notify(&self, order: &Order) {
        self.seen.lock().unwrap().push((self.label, order.id.get()));
    }
}

fn bare_desk() -> (Arc<MemorySink>, OrderDesk) {
    let sink = Arc::new(MemorySink::new());
    let desk = OrderDesk::new(sink.clone(), 5, "₹");
    (sink, desk)
}

#[test]
fn test_publish_reaches_every_subscriber_in_order() {
    for n in 0..5usize {
        let (_sink, mut desk) = bare_desk();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let labels = ["a", "b", "c", "d", "e"];
        for label in &labels[..n] {
            desk.register(Arc::new(Tally {
                label: *label,
                seen: seen.clone(),
            }));
        }

        desk.on_place_order_triggered("Pizza", "standard");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), n);
        let order: Vec<_> = seen.iter().map(|(label, _)| *label).collect();
        assert_eq!(order, labels[..n].to_vec());
    }
}

#[test]
fn test_ids_increase_across_orders() {
    let (_sink, mut desk) = bare_desk();
    let seen = Arc::new(Mutex::new(Vec::new()));
    desk.register(Arc::new(Tally {
        label: "t",
        seen: seen.clone(),
    }));

    let ids: Vec<u64> = (0..3)
        .map(|_| desk.on_place_order_triggered("Rice", "free").order.id.get())
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(*seen.lock().unwrap(), vec![("t", 1), ("t", 2), ("t", 3)]);
}

#[test]
fn test_fee_quotes_use_configured_distance() {
    let sink = Arc::new(MemorySink::new());
    let mut config = DeskConfig::default();
    config.desk.distance = 12;
    let mut desk = OrderDesk::from_config(&config, sink);

    assert_eq!(desk.on_place_order_triggered("A", "standard").fee, 60);
    assert_eq!(desk.on_place_order_triggered("A", "express").fee, 120);
    assert_eq!(desk.on_place_order_triggered("A", "free").fee, 0);
    assert_eq!(desk.on_place_order_triggered("A", "unknown").fee, 0);
}

#[test]
fn test_full_demo_sequence() {
    let sink = Arc::new(MemorySink::new());
    let mut desk = OrderDesk::from_config(&DeskConfig::default(), sink.clone());

    // Cancel before anything exists does nothing
    assert!(desk.on_cancel_order_triggered().is_none());

    let placed = desk.on_place_order_triggered("Pizza, Coke", "express");
    assert_eq!(desk.fee_label(placed.fee), "Delivery Fee: ₹50");

    desk.on_cancel_order_triggered();
    desk.on_cancel_order_triggered();

    assert_eq!(
        sink.lines(),
        vec![
            "Agent A notified: New order #1 - Pizza, Coke",
            "Agent B notified: New order #1 - Pizza, Coke",
            "Delivery Fee: ₹50",
            "Order #1 placed.",
            "Order #1 canceled.",
            "Order #1 canceled.",
        ]
    );
}

#[test]
fn test_place_three_then_undo() {
    let sink = Arc::new(MemorySink::new());
    let mut desk = OrderDesk::new(sink.clone(), 5, "₹");
    desk.on_place_order_triggered("A", "free");
    desk.on_place_order_triggered("B", "free");
    desk.on_place_order_triggered("C", "free");
    sink.drain();

    assert_eq!(desk.on_undo_triggered().map(OrderId::get), Some(3));
    assert_eq!(sink.drain(), vec!["Order #3 canceled."]);
}

#[test]
fn test_undo_scenario_through_dispatcher() {
    let sink = Arc::new(MemorySink::new());
    let mut dispatcher = OrderDispatcher::new(OrderService::new(sink.clone()));
    let order = Order::new(OrderId::new(3).unwrap(), vec!["Pizza".to_string()]);

    dispatcher.execute(Action::place(order));
    dispatcher.undo_last();

    assert_eq!(sink.lines(), vec!["Order #3 placed.", "Order #3 canceled."]);
}

#[test]
fn test_sink_is_shared_with_custom_sinks() {
    struct Counter(Mutex<usize>);
    impl NotificationSink for Counter {
        fn render_notification(&self, _text: &str) {
            *self.0.lock().unwrap() += 1;
        }
    }

    let counter = Arc::new(Counter(Mutex::new(0)));
    let mut desk = OrderDesk::from_config(&DeskConfig::default(), counter.clone());
    desk.on_place_order_triggered("Pizza", "standard");

    // two agents, the fee label and the placed message
    assert_eq!(*counter.0.lock().unwrap(), 4);
}
