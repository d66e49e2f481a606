//! The sorted-pairing distance engine.
//!
//! [`DistanceEngine`] runs the full pipeline: validate, sort both sequences
//! independently, pair them by position, and format the result. Validation
//! time is excluded from the reported processing time so the figure reflects
//! the sort and pairing work only.
//!
//! # Example
//!
//! ```
//! use pairdist::DistanceEngine;
//!
//! let engine = DistanceEngine::new();
//! let result = engine
//!     .calculate(&[3.0, 4.0, 2.0, 1.0, 3.0, 3.0], &[4.0, 3.0, 5.0, 3.0, 9.0, 3.0])
//!     .unwrap();
//! assert_eq!(result.total_distance, 11.0);
//! ```

use crate::constants::{limits, tracker::CALCULATE_OPERATION};
use crate::error::{DistanceError, Result};
use crate::metrics::PerformanceTracker;
use crate::output::format_result;
use crate::pairing::{manhattan_distance, pair_sorted};
use crate::sorting::{AscendingSort, SortStrategy};
use crate::types::DistanceResult;
use crate::validation::{EmptyInputPolicy, ValidationOutcome, Validator};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Configuration for a [`DistanceEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of elements accepted per sequence.
    pub max_size: usize,
    /// Whether two empty sequences are accepted.
    pub empty_input: EmptyInputPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_size: limits::DEFAULT_MAX_SIZE,
            empty_input: EmptyInputPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size ceiling.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the empty-input policy.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Parse a configuration from JSON. Missing fields take default values.
    ///
    /// # Errors
    /// Returns `SerializationError` for malformed JSON and `InvalidParameter`
    /// if the parsed values are out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(DistanceError::invalid_parameter(
                "max_size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Validator enforcing this configuration.
    pub fn validator(&self) -> Validator {
        Validator::new(self.max_size, self.empty_input)
    }
}

/// Computes sorted-pairing distances between two sequences.
///
/// The engine holds no per-call state and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct DistanceEngine {
    config: EngineConfig,
    validator: Validator,
    strategy: Arc<dyn SortStrategy>,
}

impl Default for DistanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceEngine {
    /// Create an engine with the default configuration and ascending sort.
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            config,
            validator: config.validator(),
            strategy: Arc::new(AscendingSort),
        }
    }

    /// Create an engine with the given configuration.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: config.validator(),
            strategy: Arc::new(AscendingSort),
        })
    }

    /// Replace the sort strategy.
    pub fn with_strategy(mut self, strategy: impl SortStrategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the active sort strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Validate two sequences against this engine's rules.
    pub fn validate(&self, first: &[f64], second: &[f64]) -> ValidationOutcome {
        self.validator.validate(first, second)
    }

    /// Compute the sorted-pairing distance between two sequences.
    ///
    /// # Errors
    /// Returns a validation error if the inputs have different lengths,
    /// exceed the size ceiling, contain non-finite or out-of-range values, or
    /// are empty under a rejecting policy. Returns `Overflow` if the total
    /// distance is not representable as a finite `f64`.
    pub fn calculate(&self, first: &[f64], second: &[f64]) -> Result<DistanceResult> {
        self.calculate_validated(&self.validator, first, second)
    }

    /// Compute with a per-call size ceiling instead of the configured one.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `max_size` is zero.
    pub fn calculate_with_limit(
        &self,
        first: &[f64],
        second: &[f64],
        max_size: usize,
    ) -> Result<DistanceResult> {
        if max_size == 0 {
            return Err(DistanceError::invalid_parameter("max_size must be at least 1"));
        }
        let validator = self.validator.with_max_size(max_size);
        self.calculate_validated(&validator, first, second)
    }

    /// Compute from decoded JSON values.
    ///
    /// # Errors
    /// In addition to the typed validation errors, returns `TypeError` if an
    /// argument is not an array and `NonNumericElement` for elements that are
    /// not numbers.
    pub fn calculate_json(&self, first: &Value, second: &Value) -> Result<DistanceResult> {
        let (first, second) = self
            .validator
            .validate_json(first, second)
            .into_result()
            .inspect_err(log_rejection)?;
        self.compute(&first, &second)
    }

    /// Compute only the total distance, without the per-pair breakdown.
    pub fn total_distance(&self, first: &[f64], second: &[f64]) -> Result<f64> {
        self.validator
            .check_slices(first, second)
            .inspect_err(log_rejection)?;
        let sorted_first = self.strategy.sort(first);
        let sorted_second = self.strategy.sort(second);
        ensure_finite(manhattan_distance(&sorted_first, &sorted_second), first.len())
    }

    /// Compute and record the invocation in `tracker`.
    ///
    /// Rejected inputs are recorded as error samples. Successful samples
    /// carry the result's memory estimate.
    pub fn calculate_tracked(
        &self,
        tracker: &PerformanceTracker,
        first: &[f64],
        second: &[f64],
    ) -> Result<DistanceResult> {
        let mut guard = tracker.start(CALCULATE_OPERATION);
        let result = self.calculate(first, second);
        if let Ok(result) = &result {
            guard.set_memory_mb(result.metadata.memory_used_mb);
        }
        guard.finish(result.is_err());
        result
    }

    /// Compute many independent inputs in parallel.
    ///
    /// Results are returned in input order.
    pub fn calculate_batch(
        &self,
        inputs: &[(Vec<f64>, Vec<f64>)],
    ) -> Vec<Result<DistanceResult>> {
        inputs
            .par_iter()
            .map(|(first, second)| self.calculate(first, second))
            .collect()
    }

    fn calculate_validated(
        &self,
        validator: &Validator,
        first: &[f64],
        second: &[f64],
    ) -> Result<DistanceResult> {
        validator
            .check_slices(first, second)
            .inspect_err(log_rejection)?;
        self.compute(first, second)
    }

    /// Sort, pair and format. Inputs must already be validated.
    fn compute(&self, first: &[f64], second: &[f64]) -> Result<DistanceResult> {
        let start = Instant::now();
        let sorted_first = self.strategy.sort(first);
        let sorted_second = self.strategy.sort(second);
        let (total, pairs) = pair_sorted(&sorted_first, &sorted_second);
        let elapsed = start.elapsed();
        let total = ensure_finite(total, pairs.len())?;

        tracing::debug!(
            len = first.len(),
            total_distance = total,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            strategy = self.strategy.name(),
            "distance calculated"
        );

        Ok(format_result(
            &sorted_first,
            &sorted_second,
            total,
            pairs,
            elapsed,
            self.strategy.name(),
        ))
    }
}

/// Each distance is finite after validation, but their sum may not be.
fn ensure_finite(total: f64, len: usize) -> Result<f64> {
    if total.is_finite() {
        Ok(total)
    } else {
        let err = DistanceError::Overflow { len };
        log_rejection(&err);
        Err(err)
    }
}

fn log_rejection(err: &DistanceError) {
    tracing::debug!(kind = %err.kind(), error = %err, "input rejected");
}
