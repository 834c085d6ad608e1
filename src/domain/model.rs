use std::fmt;
use std::num::NonZeroU64;

/// Order identifier. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(NonZeroU64);

impl OrderId {
    /// Returns `None` for zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<String>,
}

impl Order {
    pub fn new(id: OrderId, items: Vec<String>) -> Self {
        Self { id, items }
    }

    /// Splits comma separated input and trims each entry. Empty input yields
    /// a single empty item.
    pub fn parse_items(items_text: &str) -> Vec<String> {
        items_text
            .split(',')
            .map(|item| item.trim().to_string())
            .collect()
    }
}

/// Hands out order ids starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCounter {
    next: NonZeroU64,
}

impl OrderCounter {
    pub fn new() -> Self {
        Self {
            next: NonZeroU64::MIN,
        }
    }

    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Id of the most recently issued order, if any.
    pub fn last_id(&self) -> Option<OrderId> {
        OrderId::new(self.next.get() - 1)
    }
}

impl Default for OrderCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Place,
    Cancel,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Place => write!(f, "place"),
            ActionKind::Cancel => write!(f, "cancel"),
        }
    }
}
