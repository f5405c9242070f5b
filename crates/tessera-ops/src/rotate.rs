//! 90-degree clockwise rotation.
//!
//! Decomposed as transpose followed by reversing each row, so no cell
//! is ever both read source and write target within a single step.
//! Element `(i, j)` ends at `(j, side - 1 - i)`.

use crate::restoration::{Restoration, RestorationError};
use crate::transpose::Transpose;
use tessera_core::Grid;

/// The quarter-turn-clockwise restoration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateClockwise;

impl Restoration for RotateClockwise {
    fn name(&self) -> &str {
        "RotateClockwise"
    }

    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
        Transpose.apply(grid)?;
        for row in grid.rows_mut() {
            row.reverse();
        }
        Ok(())
    }
}
