//! Benchmarks for the sorted-pairing pipeline.
//!
//! Run with: cargo bench --bench distance_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pairdist::pairing::{manhattan_distance, pair_sorted};
use pairdist::{sort_sequence, DistanceEngine, NumericSequence};

fn benchmark_calculate(c: &mut Criterion) {
    let engine = DistanceEngine::new();
    let sizes = vec![100, 1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("calculate");
    for size in sizes {
        let a = NumericSequence::random(size, -1e6, 1e6);
        let b = NumericSequence::random(size, -1e6, 1e6);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("full", size), &size, |bench, _| {
            bench.iter(|| engine.calculate(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("total_only", size), &size, |bench, _| {
            bench.iter(|| engine.total_distance(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn benchmark_phases(c: &mut Criterion) {
    let size = 10_000;
    let a = NumericSequence::random(size, -1e6, 1e6);
    let b = NumericSequence::random(size, -1e6, 1e6);
    let sorted_a = sort_sequence(&a);
    let sorted_b = sort_sequence(&b);

    let mut group = c.benchmark_group("phases_10k");

    group.bench_function("sort", |bench| bench.iter(|| sort_sequence(black_box(&a))));

    group.bench_function("sort_presorted", |bench| {
        bench.iter(|| sort_sequence(black_box(&sorted_a)))
    });

    group.bench_function("pair", |bench| {
        bench.iter(|| pair_sorted(black_box(&sorted_a), black_box(&sorted_b)))
    });

    group.bench_function("manhattan", |bench| {
        bench.iter(|| manhattan_distance(black_box(&sorted_a), black_box(&sorted_b)))
    });

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let engine = DistanceEngine::new();
    let inputs: Vec<(Vec<f64>, Vec<f64>)> = (0..64)
        .map(|_| {
            (
                NumericSequence::random(5_000, -1e3, 1e3).to_vec(),
                NumericSequence::random(5_000, -1e3, 1e3).to_vec(),
            )
        })
        .collect();

    let mut group = c.benchmark_group("batch_64x5k");

    group.bench_function("sequential", |bench| {
        bench.iter(|| {
            inputs
                .iter()
                .map(|(a, b)| engine.calculate(a, b))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("parallel", |bench| {
        bench.iter(|| engine.calculate_batch(black_box(&inputs)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_calculate, benchmark_phases, benchmark_batch);
criterion_main!(benches);
