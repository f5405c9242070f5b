//! Error types for grid construction and bounds-checked access.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid`](crate::Grid) construction and access.
///
/// All variants are construction-time or caller-input failures; once a
/// `Grid` exists, its squareness invariant holds for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A nested-row constructor received a row whose length does not
    /// match the row count, so the input cannot form a square.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
    /// A row-major constructor received the wrong number of cells for
    /// the declared side.
    CellCountMismatch {
        /// The declared side length.
        side: usize,
        /// `side * side`.
        expected: usize,
        /// Number of cells actually supplied.
        actual: usize,
    },
    /// A cell coordinate lies outside the grid.
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// The grid's side length.
        side: usize,
    },
    /// A row index lies outside the grid.
    RowOutOfBounds {
        /// Requested row.
        row: usize,
        /// The grid's side length.
        side: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} has {actual} cells, expected {expected} for a square grid"
                )
            }
            Self::CellCountMismatch {
                side,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "side {side} requires {expected} cells, got {actual}"
                )
            }
            Self::CoordOutOfBounds { row, col, side } => {
                write!(f, "cell ({row}, {col}) out of bounds for side {side}")
            }
            Self::RowOutOfBounds { row, side } => {
                write!(f, "row {row} out of bounds for side {side}")
            }
        }
    }
}

impl Error for GridError {}
