//! Input validation for distance calculations.
//!
//! Checks run cheapest first: shape, length equality, emptiness, size
//! ceiling, then a scan for non-numeric, non-finite or out-of-range
//! elements. Accepted elements lie within [`limits::MAX_MAGNITUDE`], so every
//! pairwise difference is finite. Shape and
//! length failures stop validation early since every later check depends on
//! them. The element scan reports the first offending element of each
//! sequence, first sequence first.
//!
//! Two entry points are provided:
//!
//! * [`Validator::validate`] for typed `&[f64]` input, where the only possible
//!   element failures are NaN, infinite and out-of-range values.
//! * [`Validator::validate_json`] for decoded JSON handed over by a transport
//!   layer, where arguments may not be arrays and elements may be strings,
//!   booleans, `null` or nested values.

use crate::constants::{limits, DEFAULT_EMPTY_INPUT_POLICY};
use crate::error::{DistanceError, Result};
use crate::types::SequenceSide;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether two empty sequences are an acceptable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Empty inputs are valid and produce a zero-distance, zero-pair result.
    Allow,
    /// Empty inputs are rejected with [`DistanceError::EmptyInput`].
    Reject,
}

impl Default for EmptyInputPolicy {
    fn default() -> Self {
        DEFAULT_EMPTY_INPUT_POLICY
    }
}

/// Typed outcome of validating a pair of sequences.
#[derive(Debug)]
pub struct ValidationOutcome {
    errors: Vec<DistanceError>,
    sanitized: Option<(Vec<f64>, Vec<f64>)>,
}

impl ValidationOutcome {
    fn valid(first: Vec<f64>, second: Vec<f64>) -> Self {
        Self {
            errors: Vec::new(),
            sanitized: Some((first, second)),
        }
    }

    fn invalid(errors: Vec<DistanceError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            errors,
            sanitized: None,
        }
    }

    /// Return true if the inputs passed every check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations in the order they were detected. Empty when valid.
    pub fn errors(&self) -> &[DistanceError] {
        &self.errors
    }

    /// Owned copies of both sequences, present only when valid.
    pub fn sanitized(&self) -> Option<(&[f64], &[f64])> {
        self.sanitized
            .as_ref()
            .map(|(a, b)| (a.as_slice(), b.as_slice()))
    }

    /// Human-readable messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Convert into the sanitized sequences or the first violation.
    pub fn into_result(self) -> Result<(Vec<f64>, Vec<f64>)> {
        match (self.sanitized, self.errors.into_iter().next()) {
            (Some(sequences), None) => Ok(sequences),
            (_, Some(err)) => Err(err),
            // `valid` and `invalid` are the only constructors.
            (None, None) => unreachable!("outcome without sequences or errors"),
        }
    }
}

/// Validation rules applied before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_size: usize,
    empty_input: EmptyInputPolicy,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(limits::DEFAULT_MAX_SIZE, EmptyInputPolicy::default())
    }
}

impl Validator {
    /// Create a validator with the given size ceiling and empty-input policy.
    pub fn new(max_size: usize, empty_input: EmptyInputPolicy) -> Self {
        Self {
            max_size,
            empty_input,
        }
    }

    /// Return a copy with a different size ceiling.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Maximum number of elements accepted per sequence.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Policy applied to empty inputs.
    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input
    }

    /// Validate typed sequences, returning owned copies when valid.
    pub fn validate(&self, first: &[f64], second: &[f64]) -> ValidationOutcome {
        let errors = self.collect_errors(first, second);
        if errors.is_empty() {
            ValidationOutcome::valid(first.to_vec(), second.to_vec())
        } else {
            ValidationOutcome::invalid(errors)
        }
    }

    /// Validate typed sequences without copying them.
    ///
    /// Returns the first violation, which is what the engine needs before
    /// sorting the borrowed slices directly.
    pub fn check_slices(&self, first: &[f64], second: &[f64]) -> Result<()> {
        self.check_bounds(first.len(), second.len())?;

        match first_out_of_range(first, SequenceSide::First)
            .or_else(|| first_out_of_range(second, SequenceSide::Second))
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Validate decoded JSON values, converting them to `f64` sequences.
    pub fn validate_json(&self, first: &Value, second: &Value) -> ValidationOutcome {
        let (first, second) = match (first.as_array(), second.as_array()) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                let mut errors = Vec::with_capacity(2);
                if a.is_none() {
                    errors.push(DistanceError::type_error(SequenceSide::First, json_type(first)));
                }
                if b.is_none() {
                    errors.push(DistanceError::type_error(
                        SequenceSide::Second,
                        json_type(second),
                    ));
                }
                return ValidationOutcome::invalid(errors);
            }
        };

        if let Err(err) = self.check_bounds(first.len(), second.len()) {
            return ValidationOutcome::invalid(vec![err]);
        }

        let converted_first = convert_json(first, SequenceSide::First);
        let converted_second = convert_json(second, SequenceSide::Second);

        match (converted_first, converted_second) {
            (Ok(a), Ok(b)) => ValidationOutcome::valid(a, b),
            (a, b) => ValidationOutcome::invalid(a.err().into_iter().chain(b.err()).collect()),
        }
    }

    fn collect_errors(&self, first: &[f64], second: &[f64]) -> Vec<DistanceError> {
        if let Err(err) = self.check_bounds(first.len(), second.len()) {
            return vec![err];
        }

        [
            first_out_of_range(first, SequenceSide::First),
            first_out_of_range(second, SequenceSide::Second),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn check_bounds(&self, first_len: usize, second_len: usize) -> Result<()> {
        if first_len != second_len {
            return Err(DistanceError::length_mismatch(first_len, second_len));
        }

        if first_len == 0 && self.empty_input == EmptyInputPolicy::Reject {
            return Err(DistanceError::EmptyInput);
        }

        if first_len > self.max_size {
            return Err(DistanceError::size_exceeded(first_len, self.max_size));
        }

        Ok(())
    }
}

/// Validate typed sequences with the default rules.
pub fn validate(first: &[f64], second: &[f64]) -> ValidationOutcome {
    Validator::default().validate(first, second)
}

fn in_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= limits::MAX_MAGNITUDE
}

fn first_out_of_range(values: &[f64], side: SequenceSide) -> Option<DistanceError> {
    values
        .iter()
        .position(|&v| !in_range(v))
        .map(|index| DistanceError::non_numeric(side, index, values[index].to_string()))
}

fn convert_json(values: &[Value], side: SequenceSide) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value.as_f64() {
            Some(v) if in_range(v) => Ok(v),
            _ => Err(DistanceError::non_numeric(side, index, value.to_string())),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
