//! Basic usage example demonstrating the sorted-pairing engine.
//!
//! Run with: RUST_LOG=pairdist=debug cargo run --example basic_usage

use pairdist::{DistanceEngine, NumericSequence, PerformanceTracker};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sorted-Pairing Distance Demo ===\n");

    let engine = DistanceEngine::new();
    let first = [3.0, 4.0, 2.0, 1.0, 3.0, 3.0];
    let second = [4.0, 3.0, 5.0, 3.0, 9.0, 3.0];

    match engine.calculate(&first, &second) {
        Ok(result) => {
            for pair in &result.pairs {
                println!(
                    "  #{} {:>4} vs {:>4} -> {}",
                    pair.position, pair.first_value, pair.second_value, pair.distance
                );
            }
            println!("\n{}\n", result.summary());
        }
        Err(err) => eprintln!("calculation failed: {}", err),
    }

    println!("=== Validation Demo ===\n");

    let rejected = [
        (vec![1.0, 2.0], vec![1.0, 2.0, 3.0]),
        (vec![1.0, f64::NAN], vec![1.0, 2.0]),
    ];
    for (a, b) in &rejected {
        let outcome = engine.validate(a, b);
        for message in outcome.messages() {
            println!("  rejected: {}", message);
        }
    }

    println!("\n=== Performance Demo ===\n");

    let tracker = PerformanceTracker::new();
    for size in [1_000, 10_000, 100_000] {
        let a = NumericSequence::random(size, -1e6, 1e6);
        let b = NumericSequence::random(size, -1e6, 1e6);
        for _ in 0..20 {
            if let Err(err) = engine.calculate_tracked(&tracker, &a, &b) {
                eprintln!("calculation failed: {}", err);
            }
        }
        if let Some(summary) = tracker.summary(pairdist::constants::tracker::CALCULATE_OPERATION) {
            println!("  n={:>6}: p50={:.3}ms p95={:.3}ms", size, summary.median_ms, summary.p95_ms);
        }
        tracker.reset();
    }
}
