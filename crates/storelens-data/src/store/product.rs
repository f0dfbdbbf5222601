//! # Product Store
//!
//! Full-snapshot reads over the product collection.

use storelens_core::Product;

/// Read access to the full product collection.
pub trait ProductStore {
    /// Returns every product as it currently exists.
    fn all(&self) -> Vec<Product>;
}

/// In-memory product store backed by a plain `Vec`.
#[derive(Debug, Clone)]
pub struct MemoryProductStore {
    products: Vec<Product>,
}

impl MemoryProductStore {
    /// Creates a store over an already-materialized collection.
    pub fn new(products: Vec<Product>) -> Self {
        MemoryProductStore { products }
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for MemoryProductStore {
    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_every_product() {
        let store = MemoryProductStore::new(vec![
            Product::new(1, "Atlas", "books", 24.5),
            Product::new(2, "Kite", "toys", 50.0),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_snapshots_are_isolated() {
        let store = MemoryProductStore::new(vec![Product::new(1, "Atlas", "books", 24.5)]);

        // A downstream discount pass mutates its own copy only.
        let mut snapshot = store.all();
        snapshot[0].price *= 0.9;

        assert_eq!(store.all()[0].price, 24.5);
    }
}
