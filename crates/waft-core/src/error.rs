//! Error types for layout construction.
//!
//! Layouts are the only fallible boundary in the workspace: steady-state
//! reads and learning updates assume in-bounds inputs and fail fast on
//! violation rather than returning errors.

use std::error::Error;
use std::fmt;

/// Errors from building a [`GridLayout`](crate::GridLayout).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has zero rows or zero columns.
    EmptyLayout,
    /// A dimension exceeds what an `i32` coordinate can address.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// A row's width differs from the first row's width.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the offending row.
        width: usize,
        /// Width of the first row.
        expected: usize,
    },
    /// The flat cell buffer does not hold `rows * cols` entries.
    CellCountMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Actual number of cells supplied.
        actual: usize,
    },
    /// An unrecognized character in an ASCII layout sketch.
    UnknownGlyph {
        /// The character that failed to parse.
        glyph: char,
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "layout must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::RaggedRow {
                row,
                width,
                expected,
            } => {
                write!(f, "row {row} has width {width}, expected {expected}")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "cell buffer has {actual} entries, expected {expected}")
            }
            Self::UnknownGlyph { glyph, row, col } => {
                write!(f, "unknown glyph '{glyph}' at row {row}, col {col}")
            }
        }
    }
}

impl Error for LayoutError {}
