//! Zero-propagation: blank every row and column that holds a zero.
//!
//! Two-pass design: the first pass records which rows and columns of
//! the *original* grid contain at least one zero; the second pass
//! blanks them. Zeros introduced by the second pass therefore never
//! re-trigger propagation.
//!
//! A grid with no zeros is unchanged; an all-zero grid stays all zero.

use crate::restoration::{Restoration, RestorationError};
use smallvec::{smallvec, SmallVec};
use tessera_core::Grid;

/// Flag buffers stay inline for sides up to 16, which covers the demo
/// murals; larger grids spill to the heap transparently.
type Flags = SmallVec<[bool; 16]>;

/// The zero-propagation restoration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroPropagation;

impl Restoration for ZeroPropagation {
    fn name(&self) -> &str {
        "ZeroPropagation"
    }

    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
        let side = grid.side();
        let mut row_has_zero: Flags = smallvec![false; side];
        let mut col_has_zero: Flags = smallvec![false; side];

        // Pass 1: record original zero positions only.
        for r in 0..side {
            for c in 0..side {
                if grid[(r, c)] == 0 {
                    row_has_zero[r] = true;
                    col_has_zero[c] = true;
                }
            }
        }

        // Pass 2: blank flagged rows and columns.
        for r in 0..side {
            for c in 0..side {
                if row_has_zero[r] || col_has_zero[c] {
                    grid[(r, c)] = 0;
                }
            }
        }
        Ok(())
    }
}
