//! # Error Types
//!
//! Domain-specific error types for storelens-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storelens-core errors (this file)                                     │
//! │  └── CoreError        - the one failing reduction in the catalogue     │
//! │                                                                         │
//! │  storelens-data errors (separate crate)                                │
//! │  └── DataError        - dataset parse / linking failures               │
//! │                                                                         │
//! │  Everything else in the catalogue degrades gracefully:                 │
//! │  sum → 0.0, average → 0.0, map → empty map, list → empty list          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the category that came up empty)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Core analytics errors.
///
/// Only one operation in the catalogue can fail: picking the cheapest
/// product of a category is undefined when the category has no products.
/// There is no partial-result semantics; the operation fails as a whole
/// and the error propagates to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A pick-one reduction ran against an empty candidate set.
    ///
    /// ## When This Occurs
    /// - The snapshot holds no product whose category matches (the match is
    ///   case-insensitive, so this really means zero candidates)
    #[error("no products in category '{category}'")]
    NoProductsInCategory { category: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
