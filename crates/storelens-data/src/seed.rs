//! # Demo Dataset
//!
//! Parses the embedded dataset document and links it into the object graph
//! the analytics core expects.
//!
//! ## Load Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    From Flat Rows To Object Graph                       │
//! │                                                                         │
//! │  dataset.json (embedded at compile time)                               │
//! │       │                                                                 │
//! │       ▼  serde_json                                                     │
//! │  RawDataset { customers, products, orders-by-id }                      │
//! │       │                                                                 │
//! │       ▼  link()                                                         │
//! │  • index customers and products by id (duplicate ids rejected)         │
//! │  • resolve each order's customer_id and product_ids                    │
//! │  • reject dangling references, per-order product duplicates,           │
//! │    negative prices                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Dataset { MemoryCustomerStore, MemoryOrderStore, MemoryProductStore } │
//! │                                                                         │
//! │  After linking, every Order owns its Customer and Products - the       │
//! │  Order↔Product relation is symmetric by construction.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dataset Coverage
//! The demo rows are arranged so every insight in the catalogue has
//! something to say: books above and below 100, a unique cheapest book,
//! baby and toys categories, tier-2 customers ordering strictly inside
//! Feb 1 - Apr 1 2021 plus boundary orders exactly on both edge dates,
//! two orders each on 2021-03-13 and 2021-03-15, and February orders for
//! the revenue window.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use storelens_core::{Customer, Order, Product};

use crate::error::{DataError, DataResult};
use crate::store::{MemoryCustomerStore, MemoryOrderStore, MemoryProductStore};

/// The demo dataset document, embedded at compile time.
const DATASET: &str = include_str!("dataset.json");

// =============================================================================
// Raw Rows
// =============================================================================

/// The dataset document as flat rows: orders reference customers and
/// products by id, exactly as a storage layer would hand them over.
#[derive(Debug, Deserialize)]
struct RawDataset {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<RawOrder>,
}

/// An order row before linking.
#[derive(Debug, Deserialize)]
struct RawOrder {
    id: i64,
    customer_id: i64,
    placed_on: NaiveDate,
    product_ids: Vec<i64>,
}

// =============================================================================
// Dataset
// =============================================================================

/// The three loaded stores, bundled.
///
/// ## Usage
/// ```rust
/// use storelens_data::seed;
/// use storelens_data::store::OrderStore;
///
/// let dataset = seed::demo().unwrap();
/// let orders = dataset.orders().all();
/// assert!(!orders.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    customers: MemoryCustomerStore,
    orders: MemoryOrderStore,
    products: MemoryProductStore,
}

impl Dataset {
    /// The customer store.
    pub fn customers(&self) -> &MemoryCustomerStore {
        &self.customers
    }

    /// The order store.
    pub fn orders(&self) -> &MemoryOrderStore {
        &self.orders
    }

    /// The product store.
    pub fn products(&self) -> &MemoryProductStore {
        &self.products
    }
}

/// Loads the embedded demo dataset.
///
/// ## Errors
/// [`DataError`] when the document fails to parse or the rows do not link
/// into a consistent graph. The embedded document is covered by tests, so
/// a failure here means the fixture itself was edited incorrectly.
pub fn demo() -> DataResult<Dataset> {
    from_json(DATASET)
}

/// Parses and links a dataset document.
pub fn from_json(document: &str) -> DataResult<Dataset> {
    let raw: RawDataset = serde_json::from_str(document)?;
    link(raw)
}

// =============================================================================
// Linking
// =============================================================================

/// Turns flat rows into the linked object graph, validating integrity.
fn link(raw: RawDataset) -> DataResult<Dataset> {
    let mut customers_by_id: HashMap<i64, Customer> = HashMap::new();
    for customer in &raw.customers {
        if customers_by_id
            .insert(customer.id, customer.clone())
            .is_some()
        {
            return Err(DataError::DuplicateId {
                entity: "customer",
                id: customer.id,
            });
        }
    }

    let mut products_by_id: HashMap<i64, Product> = HashMap::new();
    for product in &raw.products {
        if product.price < 0.0 {
            return Err(DataError::NegativePrice {
                product: product.id,
                price: product.price,
            });
        }
        if products_by_id.insert(product.id, product.clone()).is_some() {
            return Err(DataError::DuplicateId {
                entity: "product",
                id: product.id,
            });
        }
    }

    let mut orders: Vec<Order> = Vec::with_capacity(raw.orders.len());
    let mut order_ids: HashSet<i64> = HashSet::new();
    for row in &raw.orders {
        if !order_ids.insert(row.id) {
            return Err(DataError::DuplicateId {
                entity: "order",
                id: row.id,
            });
        }

        let customer = customers_by_id
            .get(&row.customer_id)
            .cloned()
            .ok_or(DataError::UnknownCustomer {
                order: row.id,
                customer: row.customer_id,
            })?;

        let mut products: Vec<Product> = Vec::with_capacity(row.product_ids.len());
        let mut seen: HashSet<i64> = HashSet::new();
        for product_id in &row.product_ids {
            if !seen.insert(*product_id) {
                return Err(DataError::DuplicateProductOnOrder {
                    order: row.id,
                    product: *product_id,
                });
            }
            let product =
                products_by_id
                    .get(product_id)
                    .cloned()
                    .ok_or(DataError::UnknownProduct {
                        order: row.id,
                        product: *product_id,
                    })?;
            products.push(product);
        }

        orders.push(Order::new(row.id, customer, row.placed_on, products));
    }

    debug!(
        customers = raw.customers.len(),
        products = raw.products.len(),
        orders = orders.len(),
        "linked dataset"
    );

    Ok(Dataset {
        customers: MemoryCustomerStore::new(raw.customers),
        orders: MemoryOrderStore::new(orders),
        products: MemoryProductStore::new(raw.products),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
