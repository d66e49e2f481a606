//! Result types produced by a distance calculation.
//!
//! All types serialize with camelCase field names so they can be handed to
//! a JSON transport unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two input sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceSide {
    /// The first (left) sequence.
    First,
    /// The second (right) sequence.
    Second,
}

impl fmt::Display for SequenceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceSide::First => f.write_str("first"),
            SequenceSide::Second => f.write_str("second"),
        }
    }
}

/// One position of the sorted pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistancePair {
    /// Zero-based position in the sorted sequences.
    pub position: usize,
    /// Value from the sorted first sequence.
    pub first_value: f64,
    /// Value from the sorted second sequence.
    pub second_value: f64,
    /// Absolute difference between the two values.
    pub distance: f64,
}

impl DistancePair {
    /// Create a pair, computing its distance.
    #[inline]
    pub fn new(position: usize, first_value: f64, second_value: f64) -> Self {
        Self {
            position,
            first_value,
            second_value,
            distance: (first_value - second_value).abs(),
        }
    }
}

/// Metadata describing one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationMetadata {
    pub original_length_first: usize,
    pub original_length_second: usize,
    /// Time spent sorting and pairing, excluding validation.
    pub processing_time_ms: f64,
    /// Estimated memory held by the sorted copies and the pair buffer.
    #[serde(rename = "memoryUsedMB")]
    pub memory_used_mb: f64,
    pub complexity_note: String,
    /// Name of the sort strategy that produced the ordering.
    pub sort_strategy: String,
}

/// Outcome of a sorted-pairing distance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    /// Sum of all pair distances.
    pub total_distance: f64,
    /// Per-position breakdown in sorted order.
    pub pairs: Vec<DistancePair>,
    pub metadata: CalculationMetadata,
}

impl DistanceResult {
    /// Number of pairs in the result.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Return true if no pairs were produced.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize the result as JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Create a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "DistanceResult:\n  \
             Total distance: {}\n  \
             Pairs: {}\n  \
             Time: {:.3}ms ({})\n  \
             Memory: {:.4} MB\n  \
             Strategy: {}",
            self.total_distance,
            self.pairs.len(),
            self.metadata.processing_time_ms,
            self.metadata.complexity_note,
            self.metadata.memory_used_mb,
            self.metadata.sort_strategy
        )
    }
}
