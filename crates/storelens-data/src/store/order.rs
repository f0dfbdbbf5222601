//! # Order Store
//!
//! Full-snapshot reads over the order collection.

use storelens_core::Order;

/// Read access to the full order collection.
pub trait OrderStore {
    /// Returns every order as it currently exists, customer and product
    /// set included.
    fn all(&self) -> Vec<Order>;
}

/// In-memory order store backed by a plain `Vec`.
///
/// Orders are fully linked before they reach the store: each one carries
/// its customer and its product set, so downstream joins need no further
/// lookups.
#[derive(Debug, Clone)]
pub struct MemoryOrderStore {
    orders: Vec<Order>,
}

impl MemoryOrderStore {
    /// Creates a store over an already-linked collection.
    pub fn new(orders: Vec<Order>) -> Self {
        MemoryOrderStore { orders }
    }

    /// Number of orders held.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderStore for MemoryOrderStore {
    fn all(&self) -> Vec<Order> {
        self.orders.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
