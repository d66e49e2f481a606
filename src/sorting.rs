//! Sequence sorting.
//!
//! Sorting always produces a fresh ascending copy; the caller's slice is
//! never reordered. Ordering is by value only, so equal values are
//! interchangeable and the output is identical across calls for the same
//! input.

use std::fmt;

/// Strategy used to order a sequence before pairing.
///
/// Implementations must return a new vector in ascending order containing
/// exactly the input values, and must be deterministic.
pub trait SortStrategy: Send + Sync + fmt::Debug {
    /// Short name reported in result metadata.
    fn name(&self) -> &'static str;

    /// Return an ascending copy of `values`.
    fn sort(&self, values: &[f64]) -> Vec<f64>;
}

/// Default comparison sort using the IEEE 754 total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AscendingSort;

impl SortStrategy for AscendingSort {
    fn name(&self) -> &'static str {
        "ascending"
    }

    #[inline]
    fn sort(&self, values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        sorted
    }
}

/// Sort a sequence with the default strategy.
pub fn sort_sequence(values: &[f64]) -> Vec<f64> {
    AscendingSort.sort(values)
}

/// Check whether `values` is in ascending order.
pub fn is_sorted(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
