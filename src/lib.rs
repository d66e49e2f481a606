//! pairdist: sorted-pairing distance between two numeric sequences.
//!
//! Both sequences are sorted independently, paired by position, and the
//! absolute differences are summed. The crate validates and bounds inputs
//! before any computation and reports a per-pair breakdown with timing
//! metadata.
//!
//! # Features
//!
//! - **Typed Validation**: Length, size, and finiteness checks with structured errors
//! - **Pluggable Sorting**: One [`SortStrategy`] trait with an ascending default
//! - **Per-Pair Breakdown**: Every position's values and distance in the result
//! - **Performance Tracking**: Ring-buffered samples with mean, median, p95, and p99
//! - **Parallel Batches**: Independent calculations across cores with Rayon
//!
//! # Example
//!
//! ```
//! use pairdist::{DistanceEngine, PerformanceTracker};
//!
//! let engine = DistanceEngine::new();
//! let tracker = PerformanceTracker::new();
//!
//! let result = engine.calculate_tracked(&tracker, &[5.0], &[3.0]).unwrap();
//! assert_eq!(result.total_distance, 2.0);
//! println!("{}", result.summary());
//! println!("{}", tracker.report());
//! ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod input;
pub mod metrics;
pub mod output;
pub mod pairing;
pub mod sequence;
pub mod sorting;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use engine::{DistanceEngine, EngineConfig};
pub use error::{DistanceError, ErrorKind, ErrorReport, Result};
pub use metrics::{OperationSummary, PerformanceReport, PerformanceTracker, Sample};
pub use sequence::NumericSequence;
pub use sorting::{sort_sequence, AscendingSort, SortStrategy};
pub use types::{CalculationMetadata, DistancePair, DistanceResult, SequenceSide};
pub use validation::{validate, EmptyInputPolicy, ValidationOutcome, Validator};
