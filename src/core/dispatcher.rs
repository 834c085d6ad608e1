use crate::domain::model::{ActionKind, Order, OrderId};
use crate::domain::ports::NotificationSink;
use std::collections::VecDeque;
use std::sync::Arc;

/// Number of place commands kept for undo.
pub const UNDO_DEPTH: usize = 32;

/// Order-state collaborator. Only renders messages, nothing is stored.
#[derive(Clone)]
pub struct OrderService {
    sink: Arc<dyn NotificationSink>,
}

impl OrderService {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    pub fn place_order(&self, order: &Order) {
        self.sink.render_notification(&format!("Order #{} placed.", order.id));
    }

    pub fn cancel_order(&self, order: &Order) {
        self.sink.render_notification(&format!("Order #{} canceled.", order.id));
    }
}

pub trait Command {
    fn execute(&self, service: &OrderService);
}

/// Commands that can be reversed after execution.
pub trait Undo: Command {
    fn undo(&self, service: &OrderService);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    order: Order,
}

impl PlaceOrder {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl Command for PlaceOrder {
    fn execute(&self, service: &OrderService) {
        service.place_order(&self.order);
    }
}

impl Undo for PlaceOrder {
    fn undo(&self, service: &OrderService) {
        service.cancel_order(&self.order);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    order: Order,
}

impl CancelOrder {
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl Command for CancelOrder {
    fn execute(&self, service: &OrderService) {
        service.cancel_order(&self.order);
    }
}

/// A place-or-cancel intent bound to one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Place(PlaceOrder),
    Cancel(CancelOrder),
}

impl Action {
    pub fn place(order: Order) -> Self {
        Action::Place(PlaceOrder::new(order))
    }

    pub fn cancel(order: Order) -> Self {
        Action::Cancel(CancelOrder::new(order))
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Place(_) => ActionKind::Place,
            Action::Cancel(_) => ActionKind::Cancel,
        }
    }

    pub fn order(&self) -> &Order {
        match self {
            Action::Place(cmd) => cmd.order(),
            Action::Cancel(cmd) => cmd.order(),
        }
    }
}

/// Runs actions against the order service and remembers the last
/// `UNDO_DEPTH` place commands so they can be undone, newest first.
pub struct OrderDispatcher {
    service: OrderService,
    undo_stack: VecDeque<PlaceOrder>,
}

impl OrderDispatcher {
    pub fn new(service: OrderService) -> Self {
        Self {
            service,
            undo_stack: VecDeque::with_capacity(UNDO_DEPTH),
        }
    }

    pub fn execute(&mut self, action: Action) {
        tracing::debug!("Dispatching {} for order #{}", action.kind(), action.order().id);
        match action {
            Action::Place(cmd) => {
                cmd.execute(&self.service);
                if self.undo_stack.len() == UNDO_DEPTH {
                    self.undo_stack.pop_front();
                }
                self.undo_stack.push_back(cmd);
            }
            // No guard against canceling an order that was never placed
            Action::Cancel(cmd) => {
                cmd.execute(&self.service);
                let id = cmd.order().id;
                self.undo_stack.retain(|placed| placed.order().id != id);
            }
        }
    }

    /// Reverses the most recent place command still on the stack.
    pub fn undo_last(&mut self) -> Option<OrderId> {
        let cmd = self.undo_stack.pop_back()?;
        tracing::debug!("Undoing place for order #{}", cmd.order().id);
        cmd.undo(&self.service);
        Some(cmd.order().id)
    }

    pub fn undoable(&self) -> usize {
        self.undo_stack.len()
    }
}
