//! Cyclic rotation of a single row by k steps.
//!
//! The element at column `c` moves to column `(c + steps) % side`;
//! every other row is untouched. Steps are taken modulo the side, so
//! rotating by 0 or by the full side is a no-op. The shift uses the
//! standard library's in-place slice rotation, which never reads a
//! cell it has already overwritten.
//!
//! Constructed via the builder pattern: [`RowRotate::builder`].

use crate::restoration::{Restoration, RestorationError};
use tessera_core::Grid;

/// A restoration that cyclically shifts one row to the right.
#[derive(Clone, Copy, Debug)]
pub struct RowRotate {
    row: usize,
    steps: usize,
}

/// Builder for [`RowRotate`].
///
/// Required field: `row`.
pub struct RowRotateBuilder {
    row: Option<usize>,
    steps: usize,
}

impl RowRotate {
    /// Create a new builder for configuring a `RowRotate` restoration.
    pub fn builder() -> RowRotateBuilder {
        RowRotateBuilder {
            row: None,
            steps: 1,
        }
    }
}

impl RowRotateBuilder {
    /// Set the row to rotate.
    pub fn row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Set the number of steps to shift right (default: 1). Taken
    /// modulo the grid side at application time.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Build the restoration, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `row` is not set.
    pub fn build(self) -> Result<RowRotate, String> {
        let row = self.row.ok_or_else(|| "row is required".to_string())?;
        Ok(RowRotate {
            row,
            steps: self.steps,
        })
    }
}

impl Restoration for RowRotate {
    fn name(&self) -> &str {
        "RowRotate"
    }

    fn validate(&self, side: usize) -> Result<(), RestorationError> {
        if self.row >= side {
            return Err(RestorationError::RowOutOfBounds {
                row: self.row,
                side,
            });
        }
        Ok(())
    }

    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
        let side = grid.side();
        let row = grid
            .row_mut(self.row)
            .ok_or(RestorationError::RowOutOfBounds {
                row: self.row,
                side,
            })?;
        row.rotate_right(self.steps % row.len());
        Ok(())
    }
}
