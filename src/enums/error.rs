//! # Error Module - Custom *Gridwise* Error Type
//!
//! Defines the unified error type for Gridwise.
//!
//! ## Features
//! - Covers unknown or wrongly-moded operation tags, shape mismatches between
//! grid operands, and malformed grid construction input.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Catch all error type for `Gridwise`
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The operation tag is unknown, or belongs to the other mode
    /// than the entry point that received it.
    InvalidOperation {
        op: String,
        message: Option<String>,
    },
    /// Grid-grid operation on operands of different `(rows, cols)`.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Empty, zero-width or ragged input, or a flat buffer whose
    /// length does not match the requested shape.
    MalformedGrid {
        message: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidOperation { op, message } => {
                if let Some(msg) = message {
                    write!(f, "Invalid operation '{}': {}", op, msg)
                } else {
                    write!(f, "Invalid operation: unknown operation '{}'.", op)
                }
            }
            GridError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Dimension mismatch: expected {} × {}, found {} × {}.",
                    expected.0, expected.1, found.0, found.1
                )
            }
            GridError::MalformedGrid { message } => {
                write!(f, "Malformed grid: {}", message)
            }
        }
    }
}

impl Error for GridError {}
