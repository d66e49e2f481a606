//! Property-based tests for the sorted-pairing engine.
//!
//! Invariants that hold for ALL valid inputs:
//! - Determinism: repeated calls give identical results
//! - Non-negativity: every pair distance and the total are >= 0
//! - Sum consistency: total == sum of pair distances, exactly
//! - Length: one pair per input position
//! - Permutation invariance: reordering inputs leaves the total unchanged
//! - Idempotence: sorting sorted data changes nothing

use pairdist::sorting::is_sorted;
use pairdist::{sort_sequence, DistanceEngine};
use proptest::prelude::*;

/// Two equal-length sequences of finite values.
fn sequence_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..200).prop_flat_map(|len| {
        (
            prop::collection::vec(-1e6f64..1e6, len),
            prop::collection::vec(-1e6f64..1e6, len),
        )
    })
}

proptest! {
    #[test]
    fn prop_deterministic((a, b) in sequence_pair()) {
        let engine = DistanceEngine::new();
        let first = engine.calculate(&a, &b).unwrap();
        let second = engine.calculate(&a, &b).unwrap();

        prop_assert_eq!(first.total_distance, second.total_distance);
        prop_assert_eq!(first.pairs, second.pairs);
    }

    #[test]
    fn prop_non_negative((a, b) in sequence_pair()) {
        let result = DistanceEngine::new().calculate(&a, &b).unwrap();

        prop_assert!(result.total_distance >= 0.0);
        for pair in &result.pairs {
            prop_assert!(pair.distance >= 0.0);
        }
    }

    #[test]
    fn prop_sum_consistency((a, b) in sequence_pair()) {
        let result = DistanceEngine::new().calculate(&a, &b).unwrap();
        let sum = result.pairs.iter().fold(0.0, |acc, p| acc + p.distance);

        prop_assert_eq!(result.total_distance, sum);
    }

    #[test]
    fn prop_length_invariant((a, b) in sequence_pair()) {
        let result = DistanceEngine::new().calculate(&a, &b).unwrap();

        prop_assert_eq!(result.pairs.len(), a.len());
        prop_assert_eq!(result.pairs.len(), b.len());
        for (i, pair) in result.pairs.iter().enumerate() {
            prop_assert_eq!(pair.position, i);
        }
    }

    #[test]
    fn prop_permutation_invariant(
        (a, b) in sequence_pair(),
        rotate_a in 0usize..200,
        rotate_b in 0usize..200,
    ) {
        let engine = DistanceEngine::new();
        let original = engine.calculate(&a, &b).unwrap();

        let mut a2 = a.clone();
        let mut b2 = b.clone();
        a2.reverse();
        if !b2.is_empty() {
            let len = b2.len();
            b2.rotate_left(rotate_b % len);
        }
        if !a2.is_empty() {
            let len = a2.len();
            a2.rotate_right(rotate_a % len);
        }
        let permuted = engine.calculate(&a2, &b2).unwrap();

        // Same sorted sequences, so the same sums in the same order.
        prop_assert_eq!(original.total_distance, permuted.total_distance);
    }

    #[test]
    fn prop_sort_idempotent(values in prop::collection::vec(-1e9f64..1e9, 0..300)) {
        let once = sort_sequence(&values);
        let twice = sort_sequence(&once);

        prop_assert!(is_sorted(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_integer_totals_exact(
        a in prop::collection::vec(-1000i32..1000, 0..100),
        seed in any::<u64>(),
    ) {
        // Whole-number inputs must give whole-number totals.
        let b: Vec<f64> = a.iter().map(|v| f64::from((*v).wrapping_add(seed as i32 % 7))).collect();
        let a: Vec<f64> = a.iter().map(|v| f64::from(*v)).collect();
        let result = DistanceEngine::new().calculate(&a, &b).unwrap();

        prop_assert_eq!(result.total_distance.fract(), 0.0);
    }
}
