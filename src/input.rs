//! Loading sequence pairs from two-column text.
//!
//! Each non-blank line holds exactly two numbers separated by whitespace.
//! Lines whose first non-space character is `#` are comments:
//!
//! ```text
//! # left right
//! 3   4
//! 4   3
//! ```
//!
//! Parsing fails on the first malformed line with the one-based line number,
//! before anything reaches the engine.

use crate::error::{DistanceError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Split two-column text into its left and right sequences.
pub fn parse_columns(text: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    read_columns_from(text.as_bytes())
}

/// Read a two-column text file.
pub fn read_columns(path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<f64>)> {
    let file = File::open(path.as_ref())?;
    read_columns_from(file)
}

/// Read two-column text from any reader.
pub fn read_columns_from<R: Read>(reader: R) -> Result<(Vec<f64>, Vec<f64>)> {
    let reader = BufReader::new(reader);
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let (a, b) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => {
                return Err(DistanceError::invalid_format(
                    line_no,
                    format!(
                        "expected 2 columns, found {}",
                        trimmed.split_whitespace().count()
                    ),
                ))
            }
        };

        left.push(parse_number(a, line_no)?);
        right.push(parse_number(b, line_no)?);
    }

    tracing::debug!(rows = left.len(), "parsed two-column input");
    Ok((left, right))
}

fn parse_number(token: &str, line_no: usize) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DistanceError::invalid_format(
            line_no,
            format!("'{token}' is not a finite number"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_parse_columns() {
        let text = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";
        let (left, right) = parse_columns(text).unwrap();
        assert_eq!(left, vec![3.0, 4.0, 2.0, 1.0, 3.0, 3.0]);
        assert_eq!(right, vec![4.0, 3.0, 5.0, 3.0, 9.0, 3.0]);
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        let text = "# header\n\n  1.5\t-2\n   \n# trailing\n";
        let (left, right) = parse_columns(text).unwrap();
        assert_eq!(left, vec![1.5]);
        assert_eq!(right, vec![-2.0]);
    }

    #[test]
    fn test_parse_empty_text() {
        let (left, right) = parse_columns("").unwrap();
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn test_wrong_column_count() {
        let err = parse_columns("1 2\n3\n").unwrap_err();
        match err {
            DistanceError::InvalidFormat { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_columns("1 2 3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_columns("1 2\nx 4\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("'x'"));

        let err = parse_columns("NaN 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_read_columns_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5 3").unwrap();
        writeln!(file, "1 1").unwrap();
        file.flush().unwrap();

        let (left, right) = read_columns(file.path()).unwrap();
        assert_eq!(left, vec![5.0, 1.0]);
        assert_eq!(right, vec![3.0, 1.0]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_columns("/nonexistent/pairdist/input.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
