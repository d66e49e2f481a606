//! Error types for pairdist operations.
//!
//! Validation failures are expected, recoverable conditions. Each variant
//! carries the offending values so a caller can report exactly which
//! constraint was violated. [`ErrorKind`] gives transport layers a stable,
//! serializable discriminant to map onto their own status codes, and
//! [`ErrorReport`] carries the kind, message and offending detail as one
//! serializable record.

use crate::types::SequenceSide;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias using [`DistanceError`].
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Errors that can occur during pairdist operations.
#[derive(Error, Debug)]
pub enum DistanceError {
    /// An argument is not an ordered sequence of numbers.
    #[error("invalid type for {side} sequence: expected an array of numbers, got {found}")]
    TypeError {
        /// Which sequence was malformed.
        side: SequenceSide,
        /// Description of what was provided instead.
        found: String,
    },

    /// The two sequences have different lengths.
    #[error("length mismatch: first sequence has {first} elements, second has {second}")]
    LengthMismatch {
        /// Length of the first sequence.
        first: usize,
        /// Length of the second sequence.
        second: usize,
    },

    /// Both sequences are empty and the configured policy rejects that.
    #[error("empty input: sequences must contain at least one element")]
    EmptyInput,

    /// An element is not a finite real number.
    #[error("non-numeric element in {side} sequence at index {index}: {value}")]
    NonNumericElement {
        /// Which sequence holds the element.
        side: SequenceSide,
        /// Zero-based index of the first offending element.
        index: usize,
        /// Rendering of the offending value.
        value: String,
    },

    /// The sequences exceed the configured size ceiling.
    #[error("size exceeded: {len} elements, limit is {max}")]
    SizeExceeded {
        /// Number of elements provided.
        len: usize,
        /// Maximum number of elements allowed.
        max: usize,
    },

    /// The accumulated distance left the finite `f64` range.
    #[error("overflow: total distance over {len} pairs is not finite")]
    Overflow {
        /// Number of pairs summed.
        len: usize,
    },

    /// Invalid configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Text input could not be split into two numeric columns.
    #[error("invalid format at line {line}: {reason}")]
    InvalidFormat {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// I/O error while reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON decoding error.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Stable discriminant for [`DistanceError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TypeError,
    LengthMismatch,
    EmptyInput,
    NonNumericElement,
    SizeExceeded,
    Overflow,
    InvalidParameter,
    InvalidFormat,
    Io,
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TypeError => "type_error",
            ErrorKind::LengthMismatch => "length_mismatch",
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::NonNumericElement => "non_numeric_element",
            ErrorKind::SizeExceeded => "size_exceeded",
            ErrorKind::Overflow => "overflow",
            ErrorKind::InvalidParameter => "invalid_parameter",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::Io => "io",
            ErrorKind::Serialization => "serialization",
        };
        f.write_str(name)
    }
}

impl DistanceError {
    /// Creates a new `TypeError`.
    pub fn type_error(side: SequenceSide, found: impl Into<String>) -> Self {
        Self::TypeError {
            side,
            found: found.into(),
        }
    }

    /// Creates a new `LengthMismatch` error.
    pub fn length_mismatch(first: usize, second: usize) -> Self {
        Self::LengthMismatch { first, second }
    }

    /// Creates a new `NonNumericElement` error.
    pub fn non_numeric(side: SequenceSide, index: usize, value: impl Into<String>) -> Self {
        Self::NonNumericElement {
            side,
            index,
            value: value.into(),
        }
    }

    /// Creates a new `SizeExceeded` error.
    pub fn size_exceeded(len: usize, max: usize) -> Self {
        Self::SizeExceeded { len, max }
    }

    /// Creates a new `InvalidParameter` error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates a new `InvalidFormat` error.
    pub fn invalid_format(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Returns the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeError { .. } => ErrorKind::TypeError,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::NonNumericElement { .. } => ErrorKind::NonNumericElement,
            Self::SizeExceeded { .. } => ErrorKind::SizeExceeded,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::Io(_) => ErrorKind::Io,
            Self::SerializationError(_) => ErrorKind::Serialization,
        }
    }

    /// Builds the serializable view of this error.
    pub fn to_report(&self) -> ErrorReport {
        let mut report = ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
            ..ErrorReport::default()
        };
        match self {
            Self::TypeError { side, .. } => report.side = Some(*side),
            Self::LengthMismatch { first, second } => {
                report.first = Some(*first);
                report.second = Some(*second);
            }
            Self::NonNumericElement { side, index, value } => {
                report.side = Some(*side);
                report.index = Some(*index);
                report.value = Some(value.clone());
            }
            Self::SizeExceeded { len, max } => {
                report.len = Some(*len);
                report.max = Some(*max);
            }
            Self::Overflow { len } => report.len = Some(*len),
            Self::InvalidFormat { line, .. } => report.line = Some(*line),
            Self::EmptyInput
            | Self::InvalidParameter(_)
            | Self::Io(_)
            | Self::SerializationError(_) => {}
        }
        report
    }

    /// Returns true for failures produced by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TypeError { .. }
                | Self::LengthMismatch { .. }
                | Self::EmptyInput
                | Self::NonNumericElement { .. }
                | Self::SizeExceeded { .. }
        )
    }
}

/// Structured, serializable form of a [`DistanceError`].
///
/// Detail fields are present only for the variants that carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<SequenceSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Default for ErrorReport {
    fn default() -> Self {
        Self {
            kind: ErrorKind::InvalidParameter,
            message: String::new(),
            side: None,
            index: None,
            value: None,
            first: None,
            second: None,
            len: None,
            max: None,
            line: None,
        }
    }
}

impl Serialize for DistanceError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_report().serialize(serializer)
    }
}

impl From<serde_json::Error> for DistanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
