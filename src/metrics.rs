//! Performance tracking for distance calculations.
//!
//! A [`PerformanceTracker`] keeps a bounded ring buffer of timing samples per
//! operation name and turns them into aggregate statistics for performance
//! verification. It never changes the result of the operation it wraps.
//!
//! # Tracking Operations
//!
//! ```
//! use pairdist::PerformanceTracker;
//!
//! let tracker = PerformanceTracker::new();
//! let value: Result<u32, String> = tracker.track("parse", || Ok(42));
//! assert_eq!(value, Ok(42));
//!
//! let summary = tracker.summary("parse").unwrap();
//! assert_eq!(summary.count, 1);
//! ```
//!
//! Failed operations are recorded as error samples and the error is handed
//! back to the caller unchanged. A panic inside a tracked operation is also
//! recorded as an error sample before the unwind continues.
//!
//! # Statistics
//!
//! Percentiles use linear interpolation between the two nearest ranks of the
//! sorted samples. Summaries are computed from a snapshot copy so the lock is
//! held only while copying.
//!
//! # Lifecycle
//!
//! The tracker is an ordinary value: construct one, share it by reference or
//! `Arc`, and call [`PerformanceTracker::reset`] between tests.

use crate::constants::tracker::DEFAULT_CAPACITY;
use crate::error::{DistanceError, Result};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One recorded invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Wall-clock duration of the invocation.
    pub duration: Duration,
    /// Memory attributed to the invocation, if measured.
    pub memory_mb: Option<f64>,
    /// Whether the invocation failed.
    pub is_error: bool,
}

impl Sample {
    /// Create a successful sample with the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            memory_mb: None,
            is_error: false,
        }
    }

    /// Attach a memory measurement.
    pub fn with_memory_mb(mut self, memory_mb: f64) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }

    /// Mark the sample as a failed invocation.
    pub fn failed(mut self) -> Self {
        self.is_error = true;
        self
    }

    fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Bounded FIFO store of samples. Grows on demand up to `capacity`.
#[derive(Debug)]
struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
    total_recorded: u64,
}

impl SampleBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            capacity,
            total_recorded: 0,
        }
    }

    fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        self.total_recorded += 1;
    }

    fn snapshot(&self, last_n: Option<usize>) -> (Vec<Sample>, u64) {
        let skip = last_n.map_or(0, |n| self.samples.len().saturating_sub(n));
        (
            self.samples.iter().skip(skip).copied().collect(),
            self.total_recorded,
        )
    }
}

/// Aggregate statistics for one operation. Times are in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSummary {
    pub operation: String,
    /// Samples included in the statistics.
    pub count: usize,
    /// Samples tagged as failed.
    pub error_count: usize,
    /// Samples ever recorded, including evicted ones.
    pub total_recorded: u64,
    pub average_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    /// Mean memory over samples that carried a measurement.
    #[serde(rename = "averageMemoryMB")]
    pub average_memory_mb: Option<f64>,
}

impl OperationSummary {
    fn from_samples(operation: &str, samples: &[Sample], total_recorded: u64) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut durations: Vec<f64> = samples.iter().map(Sample::duration_ms).collect();
        durations.sort_unstable_by(f64::total_cmp);

        let count = durations.len();
        let average_ms = durations.iter().sum::<f64>() / count as f64;

        let memory: Vec<f64> = samples.iter().filter_map(|s| s.memory_mb).collect();
        let average_memory_mb = if memory.is_empty() {
            None
        } else {
            Some(memory.iter().sum::<f64>() / memory.len() as f64)
        };

        Some(Self {
            operation: operation.to_string(),
            count,
            error_count: samples.iter().filter(|s| s.is_error).count(),
            total_recorded,
            average_ms,
            median_ms: percentile(&durations, 50.0),
            min_ms: durations[0],
            max_ms: durations[count - 1],
            p95_ms: percentile(&durations, 95.0),
            p99_ms: percentile(&durations, 99.0),
            average_memory_mb,
        })
    }

    /// Create a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} samples ({} errors, {} recorded)\n    \
             mean={:.3}ms median={:.3}ms min={:.3}ms max={:.3}ms p95={:.3}ms p99={:.3}ms",
            self.operation,
            self.count,
            self.error_count,
            self.total_recorded,
            self.average_ms,
            self.median_ms,
            self.min_ms,
            self.max_ms,
            self.p95_ms,
            self.p99_ms
        )
    }
}

/// Serializable snapshot of every tracked operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub operations: Vec<OperationSummary>,
}

/// Percentile of an ascending slice using linear interpolation.
///
/// `pct` is in `[0, 100]`. Returns `NaN` for an empty slice.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (pct.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

/// Process-local store of timing samples keyed by operation name.
///
/// Each operation has its own buffer and lock, so concurrent writers to
/// different operations do not contend.
#[derive(Debug)]
pub struct PerformanceTracker {
    capacity: usize,
    buffers: RwLock<HashMap<String, Arc<Mutex<SampleBuffer>>>>,
}

impl Default for PerformanceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceTracker {
    /// Create a tracker retaining the default number of samples per operation.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            buffers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a tracker retaining `capacity` samples per operation.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DistanceError::invalid_parameter(
                "tracker capacity must be at least 1",
            ));
        }
        Ok(Self {
            capacity,
            buffers: RwLock::new(HashMap::new()),
        })
    }

    /// Number of samples retained per operation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Run a fallible operation and record its duration.
    ///
    /// An `Err` is recorded as an error sample and returned unchanged.
    pub fn track<T, E, F>(&self, operation: &str, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        let guard = self.start(operation);
        let result = f();
        guard.finish(result.is_err());
        result
    }

    /// Run an infallible operation and record its duration.
    pub fn measure<T, F>(&self, operation: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let guard = self.start(operation);
        let value = f();
        guard.finish(false);
        value
    }

    /// Start timing an operation manually.
    ///
    /// The sample is recorded when [`TrackGuard::finish`] is called, or as an
    /// error sample if the guard is dropped without finishing.
    pub fn start<'a>(&'a self, operation: &'a str) -> TrackGuard<'a> {
        TrackGuard {
            tracker: self,
            operation,
            started: Instant::now(),
            memory_mb: None,
            finished: false,
        }
    }

    /// Record an externally measured sample.
    pub fn record(&self, operation: &str, sample: Sample) {
        let buffer = self.buffer(operation);
        buffer.lock().push(sample);
        tracing::trace!(
            operation,
            duration_ms = sample.duration_ms(),
            is_error = sample.is_error,
            "sample recorded"
        );
    }

    /// Statistics over every retained sample of `operation`.
    pub fn summary(&self, operation: &str) -> Option<OperationSummary> {
        self.summarize(operation, None)
    }

    /// Statistics over the `last_n` most recent samples of `operation`.
    pub fn window_summary(&self, operation: &str, last_n: usize) -> Option<OperationSummary> {
        self.summarize(operation, Some(last_n))
    }

    /// Number of retained samples for `operation`.
    pub fn sample_count(&self, operation: &str) -> usize {
        self.buffers
            .read()
            .get(operation)
            .map_or(0, |buffer| buffer.lock().samples.len())
    }

    /// Names of all tracked operations, sorted.
    pub fn operations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buffers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Summaries of every tracked operation.
    pub fn snapshot(&self) -> PerformanceReport {
        PerformanceReport {
            operations: self
                .operations()
                .iter()
                .filter_map(|name| self.summary(name))
                .collect(),
        }
    }

    /// Create a human-readable report of every tracked operation.
    pub fn report(&self) -> String {
        let report = self.snapshot();
        let mut out = format!("PerformanceReport ({} operations):", report.operations.len());
        for summary in &report.operations {
            out.push_str("\n  ");
            out.push_str(&summary.summary());
        }
        out
    }

    /// Drop all samples for one operation. Returns true if it existed.
    pub fn clear(&self, operation: &str) -> bool {
        self.buffers.write().remove(operation).is_some()
    }

    /// Drop all samples for every operation.
    pub fn reset(&self) {
        self.buffers.write().clear();
    }

    fn buffer(&self, operation: &str) -> Arc<Mutex<SampleBuffer>> {
        if let Some(buffer) = self.buffers.read().get(operation) {
            return Arc::clone(buffer);
        }

        let mut buffers = self.buffers.write();
        Arc::clone(
            buffers
                .entry(operation.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(SampleBuffer::new(self.capacity)))),
        )
    }

    fn summarize(&self, operation: &str, last_n: Option<usize>) -> Option<OperationSummary> {
        let buffer = self.buffers.read().get(operation).map(Arc::clone)?;
        let (samples, total_recorded) = buffer.lock().snapshot(last_n);
        OperationSummary::from_samples(operation, &samples, total_recorded)
    }
}

/// Timer for one tracked invocation.
///
/// Dropping an unfinished guard records an error sample, which is how panics
/// inside tracked operations are counted.
#[must_use = "the sample is only recorded as a success when finish() is called"]
pub struct TrackGuard<'a> {
    tracker: &'a PerformanceTracker,
    operation: &'a str,
    started: Instant,
    memory_mb: Option<f64>,
    finished: bool,
}

impl TrackGuard<'_> {
    /// Attach a memory measurement to the sample.
    pub fn set_memory_mb(&mut self, memory_mb: f64) {
        self.memory_mb = Some(memory_mb);
    }

    /// Stop the timer and record the sample.
    pub fn finish(mut self, is_error: bool) {
        self.record(is_error);
    }

    fn record(&mut self, is_error: bool) {
        self.finished = true;
        let sample = Sample {
            duration: self.started.elapsed(),
            memory_mb: self.memory_mb,
            is_error,
        };
        if is_error {
            tracing::debug!(operation = self.operation, "tracked operation failed");
        }
        self.tracker.record(self.operation, sample);
    }
}

impl Drop for TrackGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.record(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Sample {
        Sample::new(Duration::from_millis(n))
    }

    #[test]
    fn test_percentile_interpolation() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&data, 0.0), 1.0);
        assert_eq!(percentile(&data, 100.0), 4.0);
        assert!((percentile(&data, 50.0) - 2.5).abs() < 1e-12);
        // rank = 0.95 * 3 = 2.85 -> 3 + 0.85
        assert!((percentile(&data, 95.0) - 3.85).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_edge_cases() {
        assert!(percentile(&[], 50.0).is_nan());
        assert_eq!(percentile(&[7.0], 99.0), 7.0);
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let tracker = PerformanceTracker::with_capacity(3).unwrap();
        for n in 1..=5 {
            tracker.record("op", ms(n));
        }

        let summary = tracker.summary("op").unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_recorded, 5);
        assert!((summary.min_ms - 3.0).abs() < 1e-9);
        assert!((summary.max_ms - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_statistics() {
        let tracker = PerformanceTracker::new();
        for n in [10, 20, 30, 40, 50] {
            tracker.record("op", ms(n));
        }

        let summary = tracker.summary("op").unwrap();
        assert!((summary.average_ms - 30.0).abs() < 1e-9);
        assert!((summary.median_ms - 30.0).abs() < 1e-9);
        assert!((summary.p95_ms - 48.0).abs() < 1e-9);
        assert!((summary.p99_ms - 49.6).abs() < 1e-9);
        assert_eq!(summary.average_memory_mb, None);
    }

    #[test]
    fn test_window_summary_uses_recent_samples() {
        let tracker = PerformanceTracker::new();
        for n in [100, 100, 1, 2, 3] {
            tracker.record("op", ms(n));
        }

        let window = tracker.window_summary("op", 3).unwrap();
        assert_eq!(window.count, 3);
        assert!((window.max_ms - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_track_records_error_and_propagates() {
        let tracker = PerformanceTracker::new();
        let result: std::result::Result<(), &str> = tracker.track("op", || Err("boom"));
        assert_eq!(result, Err("boom"));

        let ok: std::result::Result<u8, &str> = tracker.track("op", || Ok(1));
        assert_eq!(ok, Ok(1));

        let summary = tracker.summary("op").unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.error_count, 1);
    }

    #[test]
    fn test_panic_recorded_as_error() {
        let tracker = PerformanceTracker::new();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            tracker.measure::<(), _>("op", || panic!("boom"))
        }));
        assert!(outcome.is_err());

        let summary = tracker.summary("op").unwrap();
        assert_eq!(summary.error_count, 1);
    }

    #[test]
    fn test_memory_average() {
        let tracker = PerformanceTracker::new();
        tracker.record("op", ms(1).with_memory_mb(2.0));
        tracker.record("op", ms(1).with_memory_mb(4.0));
        tracker.record("op", ms(1));

        let summary = tracker.summary("op").unwrap();
        assert_eq!(summary.average_memory_mb, Some(3.0));
    }

    #[test]
    fn test_unknown_operation() {
        let tracker = PerformanceTracker::new();
        assert!(tracker.summary("missing").is_none());
        assert_eq!(tracker.sample_count("missing"), 0);
    }

    #[test]
    fn test_reset_and_clear() {
        let tracker = PerformanceTracker::new();
        tracker.record("a", ms(1));
        tracker.record("b", ms(1));
        assert_eq!(tracker.operations(), vec!["a".to_string(), "b".to_string()]);

        assert!(tracker.clear("a"));
        assert!(!tracker.clear("a"));
        assert_eq!(tracker.operations(), vec!["b".to_string()]);

        tracker.reset();
        assert!(tracker.operations().is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(PerformanceTracker::with_capacity(0).is_err());
    }

    #[test]
    fn test_huge_capacity_allocates_on_demand() {
        let tracker = PerformanceTracker::with_capacity(usize::MAX).unwrap();
        for i in 0..10 {
            tracker.record("op", Sample::new(Duration::from_millis(i)));
        }
        assert_eq!(tracker.sample_count("op"), 10);
        assert_eq!(tracker.capacity(), usize::MAX);
    }

    #[test]
    fn test_report_lists_operations() {
        let tracker = PerformanceTracker::new();
        tracker.record("calculate", ms(2));
        let report = tracker.report();
        assert!(report.contains("1 operations"));
        assert!(report.contains("calculate"));

        let json = serde_json::to_string(&tracker.snapshot()).unwrap();
        assert!(json.contains("\"p95Ms\""));
    }
}
