//! Assembly of [`DistanceResult`] values.
//!
//! The formatter never recomputes anything: it takes the sorted sequences,
//! the pairing output and the measured time and packages them with metadata.

use crate::constants::algorithm::{BYTES_PER_MB, COMPLEXITY_NOTE};
use crate::types::{CalculationMetadata, DistancePair, DistanceResult};
use std::mem;
use std::time::Duration;

/// Estimated bytes held by one calculation's working buffers.
///
/// Counts the two sorted copies and the pair buffer.
pub fn working_memory_bytes(
    sorted_first: &[f64],
    sorted_second: &[f64],
    pairs: &[DistancePair],
) -> usize {
    (sorted_first.len() + sorted_second.len()) * mem::size_of::<f64>()
        + pairs.len() * mem::size_of::<DistancePair>()
}

/// Build the result for one calculation.
///
/// `elapsed` must cover only the sort and pairing phases.
pub fn format_result(
    sorted_first: &[f64],
    sorted_second: &[f64],
    total_distance: f64,
    pairs: Vec<DistancePair>,
    elapsed: Duration,
    sort_strategy: &str,
) -> DistanceResult {
    debug_assert_eq!(sorted_first.len(), pairs.len());
    debug_assert_eq!(sorted_second.len(), pairs.len());

    let memory_bytes = working_memory_bytes(sorted_first, sorted_second, &pairs);

    DistanceResult {
        total_distance,
        metadata: CalculationMetadata {
            original_length_first: sorted_first.len(),
            original_length_second: sorted_second.len(),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
            memory_used_mb: memory_bytes as f64 / BYTES_PER_MB,
            complexity_note: COMPLEXITY_NOTE.to_string(),
            sort_strategy: sort_strategy.to_string(),
        },
        pairs,
    }
}
