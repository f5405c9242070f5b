//! Canonical fixture grids.
//!
//! The two murals from the restoration walkthrough, plus a sequential
//! grid generator. Tests that pin exact expected values all start from
//! these.

use tessera_core::Grid;

/// The degraded Mural of Unity: a 6×6 grid with blank tiles (zeros) at
/// (1, 3) and (5, 1).
pub fn unity_mural() -> Grid {
    Grid::from_rows(&[
        vec![12, 3, 7, 14, 5, 8],
        vec![9, 16, 11, 0, 2, 18],
        vec![21, 4, 13, 22, 6, 19],
        vec![15, 10, 24, 20, 3, 17],
        vec![8, 26, 28, 1, 23, 30],
        vec![31, 0, 34, 33, 29, 25],
    ])
    .expect("unity literal is square")
}

/// The degraded Mural of Victory: the 6×6 grid holding 1..=36 in
/// row-major order.
pub fn victory_mural() -> Grid {
    sequential(6)
}

/// A `side`×`side` grid holding `1..=side²` in row-major order.
pub fn sequential(side: usize) -> Grid {
    Grid::from_row_major(side, (1..=(side * side) as i64).collect())
        .expect("cell count matches side by construction")
}
