//! Error types for lot construction.

use std::error::Error;
use std::fmt;

/// Errors arising from building a lot. Any of these means no lot exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A lot needs at least one row and one column.
    EmptyLot,
    /// A dimension exceeds the largest supported axis length.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The value supplied.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `rows * cols` exceeds the largest supported lot.
    TooManySpaces {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
        /// The largest accepted space count.
        max: usize,
    },
    /// The initial assignment does not cover every cell exactly once.
    SeedCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Number of seeds supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLot => write!(f, "lot must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::TooManySpaces { rows, cols, max } => {
                write!(f, "{rows} x {cols} spaces exceeds maximum of {max}")
            }
            Self::SeedCountMismatch { expected, actual } => {
                write!(f, "expected {expected} space seeds, got {actual}")
            }
        }
    }
}

impl Error for GridError {}
