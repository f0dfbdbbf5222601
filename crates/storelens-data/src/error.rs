//! # Data Layer Error Types
//!
//! Error types for dataset parsing and linking.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  JSON parse error (serde_json::Error)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Adds linking failures on top                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apps/report aborts startup with the message                           │
//! │                                                                         │
//! │  The stores themselves are infallible: once a Dataset exists, every    │
//! │  `all()` call succeeds.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Data layer errors.
///
/// Raised only while turning the flat dataset rows into a linked object
/// graph. Every variant points at the offending row, so a broken fixture
/// is diagnosable from the message alone.
#[derive(Debug, Error)]
pub enum DataError {
    /// The embedded dataset is not valid JSON for the expected row layout.
    #[error("invalid dataset document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two rows of one entity type share an id.
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: i64 },

    /// An order row references a customer id with no customer row.
    #[error("order {order} references unknown customer {customer}")]
    UnknownCustomer { order: i64, customer: i64 },

    /// An order row references a product id with no product row.
    #[error("order {order} references unknown product {product}")]
    UnknownProduct { order: i64, product: i64 },

    /// An order row lists the same product twice. The product set of an
    /// order has set semantics; duplicates would silently inflate totals.
    #[error("order {order} lists product {product} more than once")]
    DuplicateProductOnOrder { order: i64, product: i64 },

    /// A product row carries a negative price.
    #[error("product {product} has negative price {price}")]
    NegativePrice { product: i64, price: f64 },
}

/// Result type for data layer operations.
pub type DataResult<T> = Result<T, DataError>;

// =============================================================================
// Unit Tests
// =============================================================================
