//! Computes the sorted-pairing distance of a two-column text file.
//!
//! Run with: cargo run --example two_column_file -- path/to/input.txt

use pairdist::{input, DistanceEngine};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: two_column_file <path>");
        return ExitCode::FAILURE;
    };

    let result = input::read_columns(&path)
        .and_then(|(left, right)| DistanceEngine::new().calculate(&left, &right));

    match result {
        Ok(result) => {
            println!("{}", result.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error [{}]: {}", err.kind(), err);
            ExitCode::FAILURE
        }
    }
}
