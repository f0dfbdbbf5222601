//! # storelens-core: Pure Analytics Logic for Storelens
//!
//! This crate is the **heart** of Storelens. It answers a fixed catalogue of
//! analytical questions over an in-memory retail object graph, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storelens Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/report (binary)                         │   │
//! │  │       loads the dataset, runs the catalogue, logs results       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storelens-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ insights  │  │   stats   │  │   error   │  │   │
//! │  │   │ Customer  │  │ filtering │  │   Price   │  │ CoreError │  │   │
//! │  │   │ Order     │  │ joining   │  │  Summary  │  │           │  │   │
//! │  │   │ Product   │  │ grouping  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storelens-data (Store Layer)                 │   │
//! │  │          store contract, in-memory stores, demo dataset         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Customer, Order, Product)
//! - [`insights`] - The catalogue of derivation operations
//! - [`stats`] - Price summary statistics
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every insight is deterministic - same snapshots,
//!    same result
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Identity Equality**: entities compare and hash by id, so grouping
//!    and deduplication never depend on mutable fields
//! 4. **Explicit Errors**: the one failing reduction returns a typed error,
//!    everything else degrades to documented zero/empty values
//!
//! ## Example Usage
//!
//! ```rust
//! use storelens_core::insights::Insights;
//! use storelens_core::types::Product;
//!
//! let products = vec![
//!     Product::new(1, "War and Peace", "books", 125.0),
//!     Product::new(2, "Paperback thriller", "books", 12.5),
//! ];
//!
//! let insights = Insights::new(&[], &[], &products);
//! let pricey = insights.products_in_category_over("books", 100.0);
//!
//! assert_eq!(pricey.len(), 1);
//! assert_eq!(pricey[0].id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod insights;
pub mod stats;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storelens_core::Insights` instead of
// `use storelens_core::insights::Insights`

pub use error::{CoreError, CoreResult};
pub use insights::Insights;
pub use stats::PriceSummary;
pub use types::{Customer, Order, Product};
