//! Benchmark profiles and utilities for the Tessera toolkit.
//!
//! Provides pre-built grids for benchmarking:
//!
//! - [`patterned_grid`]: deterministic cell pattern with periodic zeros
//! - [`zero_free_grid`]: the same pattern offset so no cell is zero

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::Grid;

/// Build a `side`×`side` grid with a deterministic cell pattern.
///
/// Cells cycle through `0..53`, so roughly one cell in 53 is zero.
/// That gives zero-propagation real work without blanking the whole
/// grid.
pub fn patterned_grid(side: usize) -> Grid {
    let cells = (0..side * side).map(|i| (i % 53) as i64).collect();
    Grid::from_row_major(side, cells).expect("cell count matches side by construction")
}

/// Build a `side`×`side` grid with the same pattern shifted so that no
/// cell is zero. Useful as the zero-propagation fast-path baseline.
pub fn zero_free_grid(side: usize) -> Grid {
    let cells = (0..side * side).map(|i| (i % 53) as i64 + 1).collect();
    Grid::from_row_major(side, cells).expect("cell count matches side by construction")
}
