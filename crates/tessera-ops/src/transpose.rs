//! In-place transpose across the main diagonal.
//!
//! # Semantics
//!
//! - Element `(i, j)` moves to `(j, i)` for all `i, j`.
//! - Each off-diagonal pair is swapped exactly once (`i < j`); the
//!   diagonal is untouched. No allocation.
//! - Sides 0 and 1 are no-ops.

use crate::restoration::{Restoration, RestorationError};
use tessera_core::Grid;

/// The transpose restoration.
///
/// The simplest restoration: no parameters, no allocation. Applying it
/// twice returns the grid to its starting arrangement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transpose;

impl Restoration for Transpose {
    fn name(&self) -> &str {
        "Transpose"
    }

    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
        let side = grid.side();
        for i in 0..side {
            for j in (i + 1)..side {
                grid.swap((i, j), (j, i));
            }
        }
        Ok(())
    }
}
