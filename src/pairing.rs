//! Pairing of sorted sequences and distance accumulation.
//!
//! Both inputs must already be sorted and of equal length. The validator
//! guarantees that before anything reaches this module; a length mismatch
//! here is a broken contract and panics.

use crate::types::DistancePair;

/// Pair two sorted sequences position by position.
///
/// Returns the total distance and the per-position breakdown. The total is
/// the left-to-right sum of the pair distances, so it equals
/// `pairs.iter().map(|p| p.distance).sum()` exactly.
///
/// # Panics
/// Panics if the sequences have different lengths.
pub fn pair_sorted(first: &[f64], second: &[f64]) -> (f64, Vec<DistancePair>) {
    assert_eq!(first.len(), second.len(), "Sequence lengths must match");

    let mut pairs = Vec::with_capacity(first.len());
    let mut total = 0.0f64;

    for (position, (&a, &b)) in first.iter().zip(second.iter()).enumerate() {
        let pair = DistancePair::new(position, a, b);
        total += pair.distance;
        pairs.push(pair);
    }

    debug_assert!(total >= 0.0 || total.is_nan());
    (total, pairs)
}

/// Sum of absolute differences between two sorted sequences.
///
/// Same total as [`pair_sorted`] without materializing the pairs.
///
/// # Panics
/// Panics if the sequences have different lengths.
#[inline]
pub fn manhattan_distance(first: &[f64], second: &[f64]) -> f64 {
    assert_eq!(first.len(), second.len(), "Sequence lengths must match");

    first
        .iter()
        .zip(second.iter())
        .fold(0.0, |acc, (a, b)| acc + (a - b).abs())
}
