//! # storelens-data: Store Layer for Storelens
//!
//! This crate provides the collections the analytics core consumes.
//! It owns the store contract, the in-memory implementations, and the
//! embedded demo dataset.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storelens Data Flow                              │
//! │                                                                         │
//! │  apps/report (binary)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   storelens-data (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     store     │    │     seed      │    │    error     │  │   │
//! │  │   │  CustomerStore│    │ dataset.json  │    │  DataError   │  │   │
//! │  │   │  OrderStore   │◄───│ parse + link  │    │              │  │   │
//! │  │   │  ProductStore │    │ into Dataset  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storelens-core consumes the snapshots (no query pushdown)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store traits and in-memory implementations
//! - [`seed`] - Embedded demo dataset and the linker that builds the graph
//! - [`error`] - Data layer error types
//!
//! ## Usage
//!
//! ```rust
//! use storelens_data::seed;
//! use storelens_data::store::OrderStore;
//!
//! let dataset = seed::demo().unwrap();
//!
//! // Full-collection snapshots; all filtering happens downstream.
//! let orders = dataset.orders().all();
//! assert!(!orders.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult};
pub use seed::Dataset;

// Store re-exports for convenience
pub use store::customer::{CustomerStore, MemoryCustomerStore};
pub use store::order::{MemoryOrderStore, OrderStore};
pub use store::product::{MemoryProductStore, ProductStore};
