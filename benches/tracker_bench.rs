//! Benchmarks for performance tracker overhead.
//!
//! Run with: cargo bench --bench tracker_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pairdist::{DistanceEngine, NumericSequence, PerformanceTracker, Sample};
use std::time::Duration;

fn benchmark_tracker(c: &mut Criterion) {
    let tracker = PerformanceTracker::new();
    for i in 0..1_000 {
        tracker.record("warm", Sample::new(Duration::from_micros(i)));
    }

    let mut group = c.benchmark_group("tracker");

    group.bench_function("record", |b| {
        b.iter(|| tracker.record(black_box("hot"), Sample::new(Duration::from_micros(5))))
    });

    group.bench_function("summary_1000", |b| b.iter(|| tracker.summary(black_box("warm"))));

    group.bench_function("window_summary_100", |b| {
        b.iter(|| tracker.window_summary(black_box("warm"), 100))
    });

    group.finish();

    // Overhead of tracking on a real calculation
    let engine = DistanceEngine::new();
    let a = NumericSequence::random(1_000, -1e3, 1e3);
    let b = NumericSequence::random(1_000, -1e3, 1e3);

    let mut group = c.benchmark_group("tracked_calculate_1k");
    group.bench_function("untracked", |bench| {
        bench.iter(|| engine.calculate(black_box(&a), black_box(&b)))
    });
    group.bench_function("tracked", |bench| {
        bench.iter(|| engine.calculate_tracked(&tracker, black_box(&a), black_box(&b)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_tracker);
criterion_main!(benches);
