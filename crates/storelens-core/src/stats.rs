//! # Price Statistics
//!
//! Provides the [`PriceSummary`] accumulator for summarizing product prices.
//!
//! ## Empty-Set Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHAT DOES A SUMMARY OF NOTHING LOOK LIKE?                              │
//! │                                                                         │
//! │  count   = 0                                                            │
//! │  sum     = 0.0      (the empty sum)                                     │
//! │  min     = +∞       (identity of the min fold)                          │
//! │  max     = -∞       (identity of the max fold)                          │
//! │  average = 0.0      (NOT NaN - callers log this value directly)         │
//! │                                                                         │
//! │  Observing a single price x collapses min and max to x.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

// =============================================================================
// Price Summary
// =============================================================================

/// Summary statistics over a set of prices: count, sum, min, max.
///
/// Built by folding prices one at a time, so it never materializes the
/// input. The average is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Number of prices observed.
    pub count: usize,

    /// Sum of all observed prices.
    pub sum: f64,

    /// Smallest observed price; `+∞` when nothing was observed.
    pub min: f64,

    /// Largest observed price; `-∞` when nothing was observed.
    pub max: f64,
}

impl PriceSummary {
    /// Creates an empty summary (the fold identity).
    #[inline]
    pub const fn empty() -> Self {
        PriceSummary {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Folds one price into the summary.
    pub fn observe(&mut self, price: f64) {
        self.count += 1;
        self.sum += price;
        self.min = self.min.min(price);
        self.max = self.max.max(price);
    }

    /// Builds a summary from an iterator of prices.
    ///
    /// ## Example
    /// ```rust
    /// use storelens_core::stats::PriceSummary;
    ///
    /// let summary = PriceSummary::from_prices([55.0, 80.0]);
    /// assert_eq!(summary.count, 2);
    /// assert_eq!(summary.sum, 135.0);
    /// assert_eq!(summary.min, 55.0);
    /// assert_eq!(summary.max, 80.0);
    /// ```
    pub fn from_prices(prices: impl IntoIterator<Item = f64>) -> Self {
        let mut summary = PriceSummary::empty();
        for price in prices {
            summary.observe(price);
        }
        summary
    }

    /// The mean of the observed prices, or `0.0` when nothing was observed.
    #[inline]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Checks whether any price was observed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for PriceSummary {
    fn default() -> Self {
        PriceSummary::empty()
    }
}

impl fmt::Display for PriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={}, sum={:.2}, min={:.2}, average={:.2}, max={:.2}",
            self.count,
            self.sum,
            self.min,
            self.average(),
            self.max
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_sentinels() {
        let summary = PriceSummary::empty();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.min, f64::INFINITY);
        assert_eq!(summary.max, f64::NEG_INFINITY);
        assert_eq!(summary.average(), 0.0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_single_observation_collapses_min_max() {
        let summary = PriceSummary::from_prices([42.0]);

        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.average(), 42.0);
    }

    #[test]
    fn test_fold_over_several_prices() {
        let summary = PriceSummary::from_prices([55.0, 120.0, 12.5]);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.sum, 187.5);
        assert_eq!(summary.min, 12.5);
        assert_eq!(summary.max, 120.0);
        assert_eq!(summary.average(), 62.5);
    }

    #[test]
    fn test_display() {
        let summary = PriceSummary::from_prices([55.0, 80.0]);
        assert_eq!(
            summary.to_string(),
            "count=2, sum=135.00, min=55.00, average=67.50, max=80.00"
        );
    }
}
