//! # Domain Types
//!
//! Core domain entities for the Storelens analytics engine.
//!
//! ## Entity Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Relations                                │
//! │                                                                         │
//! │  ┌─────────────────┐ 1     * ┌─────────────────┐ *     * ┌───────────┐ │
//! │  │    Customer     │◄────────│      Order      │────────►│  Product  │ │
//! │  │  ─────────────  │         │  ─────────────  │         │ ───────── │ │
//! │  │  id (i64)       │         │  id (i64)       │         │ id (i64)  │ │
//! │  │  name           │         │  customer       │         │ name      │ │
//! │  │  tier           │         │  placed_on      │         │ category  │ │
//! │  └─────────────────┘         │  products (set) │         │ price     │ │
//! │                              └─────────────────┘         └───────────┘ │
//! │                                                                         │
//! │  Product→Order is the DERIVED direction: it is computed from the       │
//! │  Order snapshot when a query needs it, never stored on the entity      │
//! │  (a stored back-reference would make the graph cyclic).                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Equality
//! Every entity implements `PartialEq`/`Eq`/`Hash` **by id only**. Grouping,
//! map keys, and deduplication therefore never depend on mutable fields:
//! a discounted copy of a product still deduplicates against the original.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Customer
// =============================================================================

/// A customer who places orders.
///
/// Customers are read-only snapshots for the engine: identity is assigned
/// by the storage layer before any insight runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Segmentation tier (small integer, 1-3 in the demo data).
    pub tier: i32,
}

impl Customer {
    /// Creates a customer.
    pub fn new(id: i64, name: impl Into<String>, tier: i32) -> Self {
        Customer {
            id,
            name: name.into(),
            tier,
        }
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {} '{}' (tier {})", self.id, self.name, self.tier)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can appear on orders.
///
/// `category` is compared case-insensitively throughout the engine; use
/// [`Product::in_category`] instead of comparing the field directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Classification attribute, e.g. "books". Case-insensitive.
    pub category: String,

    /// Unit price. Non-negative.
    pub price: f64,
}

impl Product {
    /// Creates a product.
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Checks whether this product belongs to `category`, ignoring ASCII case.
    #[inline]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Returns a copy of this product with a different price.
    ///
    /// This is the only supported way to express repricing: the original
    /// product is never mutated, so stores keep serving unchanged snapshots.
    ///
    /// ## Example
    /// ```rust
    /// use storelens_core::types::Product;
    ///
    /// let toy = Product::new(7, "Wooden train", "toys", 40.0);
    /// let discounted = toy.with_price(toy.price * 0.9);
    ///
    /// assert_eq!(discounted.price, 36.0);
    /// assert_eq!(toy.price, 40.0); // untouched
    /// ```
    pub fn with_price(&self, price: f64) -> Self {
        Product {
            price,
            ..self.clone()
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {} '{}' ({}) at {:.2}",
            self.id, self.name, self.category, self.price
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by exactly one customer on a calendar date.
///
/// `products` has set semantics: a product appears at most once per order.
/// The dataset linker enforces this; the engine assumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier.
    pub id: i64,

    /// The customer who placed the order. Many orders may share a customer.
    pub customer: Customer,

    /// The calendar date the order was placed (no time component).
    pub placed_on: NaiveDate,

    /// The products on the order. At most one occurrence per product.
    pub products: Vec<Product>,
}

impl Order {
    /// Creates an order.
    pub fn new(id: i64, customer: Customer, placed_on: NaiveDate, products: Vec<Product>) -> Self {
        Order {
            id,
            customer,
            placed_on,
            products,
        }
    }

    /// The sum of this order's product prices.
    pub fn total(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    /// Checks whether any product on this order belongs to `category`
    /// (ASCII case-insensitive).
    pub fn contains_category(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.in_category(category))
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} placed {} by customer {}, {} product(s)",
            self.id,
            self.placed_on,
            self.customer.id,
            self.products.len()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_identity_equality_ignores_fields() {
        let a = Product::new(1, "Hardcover", "books", 120.0);
        let b = Product::new(1, "Renamed", "toys", 5.0);
        let c = Product::new(2, "Hardcover", "books", 120.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_identity_hash_matches_equality() {
        let mut seen = HashSet::new();
        seen.insert(Product::new(1, "Hardcover", "books", 120.0));

        // Same id, different price: still the same entity.
        assert!(seen.contains(&Product::new(1, "Hardcover", "books", 108.0)));
        assert!(!seen.contains(&Product::new(2, "Hardcover", "books", 120.0)));
    }

    #[test]
    fn test_in_category_is_case_insensitive() {
        let p = Product::new(1, "Atlas", "Books", 55.0);

        assert!(p.in_category("books"));
        assert!(p.in_category("BOOKS"));
        assert!(!p.in_category("toys"));
    }

    #[test]
    fn test_with_price_leaves_original_untouched() {
        let p = Product::new(1, "Atlas", "books", 55.0);
        let repriced = p.with_price(49.5);

        assert_eq!(repriced.price, 49.5);
        assert_eq!(repriced.id, p.id);
        assert_eq!(p.price, 55.0);
    }

    #[test]
    fn test_order_total_sums_product_prices() {
        let customer = Customer::new(1, "Alice", 1);
        let order = Order::new(
            10,
            customer,
            date(2021, 3, 15),
            vec![
                Product::new(1, "Atlas", "books", 55.0),
                Product::new(2, "Blocks", "toys", 20.0),
            ],
        );

        assert_eq!(order.total(), 75.0);
    }

    #[test]
    fn test_order_total_is_zero_for_empty_order() {
        let order = Order::new(10, Customer::new(1, "Alice", 1), date(2021, 3, 15), vec![]);
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn test_contains_category() {
        let order = Order::new(
            10,
            Customer::new(1, "Alice", 1),
            date(2021, 3, 15),
            vec![Product::new(2, "Rattle", "Baby", 12.0)],
        );

        assert!(order.contains_category("baby"));
        assert!(!order.contains_category("books"));
    }

    #[test]
    fn test_display_formats() {
        let customer = Customer::new(2, "Bob", 2);
        assert_eq!(customer.to_string(), "Customer 2 'Bob' (tier 2)");

        let product = Product::new(3, "Atlas", "books", 55.0);
        assert_eq!(product.to_string(), "Product 3 'Atlas' (books) at 55.00");

        let order = Order::new(9, customer, date(2021, 2, 15), vec![product]);
        assert_eq!(
            order.to_string(),
            "Order 9 placed 2021-02-15 by customer 2, 1 product(s)"
        );
    }
}
