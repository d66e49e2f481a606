//! Named constants for configuration values.
//!
//! This module centralizes default values and contract constants used
//! throughout the crate, making them easier to find, document, and tune.

use crate::validation::EmptyInputPolicy;

/// Constants for input bounds.
pub mod limits {
    /// Default maximum number of elements accepted per sequence.
    /// Bounds worst-case O(n log n) sort cost and memory per request.
    pub const DEFAULT_MAX_SIZE: usize = 100_000;

    /// Largest integer magnitude that `f64` represents exactly (2^53 - 1).
    pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    /// Largest element magnitude accepted. The difference of any two
    /// accepted elements is at most `f64::MAX` and therefore finite.
    pub const MAX_MAGNITUDE: f64 = f64::MAX / 2.0;
}

/// Constants for the performance tracker.
pub mod tracker {
    /// Default number of samples retained per operation name.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Operation name used when the engine records its own calculations.
    pub const CALCULATE_OPERATION: &str = "calculate";
}

/// Constants describing the algorithm for result metadata.
pub mod algorithm {
    /// Complexity annotation attached to every result.
    pub const COMPLEXITY_NOTE: &str = "O(n log n) time, O(n) space";

    /// Bytes per megabyte used when reporting memory.
    pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
}

/// Empty equal-length inputs are accepted and produce a zero result.
pub const DEFAULT_EMPTY_INPUT_POLICY: EmptyInputPolicy = EmptyInputPolicy::Allow;
