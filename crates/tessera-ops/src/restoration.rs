//! The [`Restoration`] trait and its error type.
//!
//! Restorations are modular, stateless operators executed in sequence
//! over a square grid. Structural configuration (row indices and the
//! like) is checked once at pipeline construction via
//! [`Restoration::validate`], not on every application.

use std::error::Error;
use std::fmt;
use tessera_core::Grid;

/// Errors from individual restoration execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestorationError {
    /// A configured row index lies outside the grid.
    RowOutOfBounds {
        /// The configured row.
        row: usize,
        /// The grid's side length.
        side: usize,
    },
    /// The restoration failed for a reason best described in prose.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for RestorationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfBounds { row, side } => {
                write!(f, "row {row} out of bounds for side {side}")
            }
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for RestorationError {}

/// A modular, stateless operator in a restoration pipeline.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same grid produces the same
///   result.
/// - `&self` — restorations are stateless; all mutable state lives in
///   the grid they are applied to.
/// - `validate()` is called once at pipeline construction, not per run.
///
/// # Object safety
///
/// This trait is object-safe; pipelines store restorations as
/// `Vec<Box<dyn Restoration>>`.
///
/// # Examples
///
/// A minimal restoration that blanks the whole grid:
///
/// ```
/// use tessera_core::Grid;
/// use tessera_ops::{Restoration, RestorationError};
///
/// struct BlankAll;
///
/// impl Restoration for BlankAll {
///     fn name(&self) -> &str { "blank_all" }
///
///     fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
///         grid.fill(0);
///         Ok(())
///     }
/// }
///
/// let mut grid = Grid::filled(3, 9);
/// BlankAll.apply(&mut grid).unwrap();
/// assert!(grid.as_slice().iter().all(|&v| v == 0));
/// ```
pub trait Restoration: Send + 'static {
    /// Human-readable name for error reporting and stage snapshots.
    fn name(&self) -> &str;

    /// Check this restoration's configuration against the pipeline's
    /// grid side.
    ///
    /// Default: no constraint.
    fn validate(&self, _side: usize) -> Result<(), RestorationError> {
        Ok(())
    }

    /// Apply the restoration to the grid in place.
    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError>;
}
