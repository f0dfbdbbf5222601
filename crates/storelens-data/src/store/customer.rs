//! # Customer Store
//!
//! Full-snapshot reads over the customer collection.

use storelens_core::Customer;

/// Read access to the full customer collection.
///
/// Implementations return an owned snapshot on every call; callers may
/// sort, filter, or otherwise consume it freely.
pub trait CustomerStore {
    /// Returns every customer as it currently exists.
    fn all(&self) -> Vec<Customer>;
}

/// In-memory customer store backed by a plain `Vec`.
#[derive(Debug, Clone)]
pub struct MemoryCustomerStore {
    customers: Vec<Customer>,
}

impl MemoryCustomerStore {
    /// Creates a store over an already-materialized collection.
    pub fn new(customers: Vec<Customer>) -> Self {
        MemoryCustomerStore { customers }
    }

    /// Number of customers held.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerStore for MemoryCustomerStore {
    fn all(&self) -> Vec<Customer> {
        self.customers.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_every_customer() {
        let store = MemoryCustomerStore::new(vec![
            Customer::new(1, "Alice", 1),
            Customer::new(2, "Bob", 2),
        ]);

        let snapshot = store.all();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, 1);
        assert_eq!(snapshot[1].id, 2);
    }

    #[test]
    fn test_snapshots_are_isolated() {
        let store = MemoryCustomerStore::new(vec![Customer::new(1, "Alice", 1)]);

        let mut snapshot = store.all();
        snapshot.clear();

        assert_eq!(store.all().len(), 1);
    }
}
