//! The square [`Grid`] container.
//!
//! A `Grid` is a dynamically-sized N×N collection of `i64` cells stored
//! row-major. The side length is validated once at construction; every
//! consumer in the workspace may assume `cells.len() == side * side`
//! afterwards. Sides 0 and 1 are ordinary grids, not special cases.

use crate::error::GridError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A square grid of `i64` cells in row-major order.
///
/// Mutation happens in place through [`set`](Grid::set), the panicking
/// [`IndexMut`] operator, or the row-slice accessors. The rendering
/// produced by the `Display` impl is one line per row with cells
/// separated by a single space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<i64>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] if any row's length differs
    /// from the number of rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, GridError> {
        let side = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(GridError::NotSquare {
                    row: i,
                    expected: side,
                    actual: row.len(),
                });
            }
        }
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Ok(Self { side, cells })
    }

    /// Build a grid from a flat row-major cell vector.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] if `cells.len()` is not
    /// `side * side`.
    pub fn from_row_major(side: usize, cells: Vec<i64>) -> Result<Self, GridError> {
        if cells.len() != side * side {
            return Err(GridError::CellCountMismatch {
                side,
                expected: side * side,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Build a grid with every cell set to `value`.
    pub fn filled(side: usize, value: i64) -> Self {
        Self {
            side,
            cells: vec![value; side * side],
        }
    }

    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side * side`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for the degenerate side-0 grid.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Bounds-checked cell read.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.side && col < self.side {
            Some(self.cells[self.idx(row, col)])
        } else {
            None
        }
    }

    /// Bounds-checked cell write.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CoordOutOfBounds`] if the coordinate lies
    /// outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<(), GridError> {
        if row < self.side && col < self.side {
            let i = self.idx(row, col);
            self.cells[i] = value;
            Ok(())
        } else {
            Err(GridError::CoordOutOfBounds {
                row,
                col,
                side: self.side,
            })
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: i64) {
        self.cells.fill(value);
    }

    /// One row as a slice, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        if row < self.side {
            Some(&self.cells[row * self.side..(row + 1) * self.side])
        } else {
            None
        }
    }

    /// One row as a mutable slice, or `None` if `row` is out of bounds.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [i64]> {
        if row < self.side {
            Some(&mut self.cells[row * self.side..(row + 1) * self.side])
        } else {
            None
        }
    }

    /// Iterate over rows in order, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // chunk size must be nonzero; a side-0 grid has no cells, so
        // chunking by 1 yields nothing.
        self.cells.chunks_exact(self.side.max(1))
    }

    /// Iterate over rows in order, each as a mutable slice.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [i64]> {
        self.cells.chunks_exact_mut(self.side.max(1))
    }

    /// Swap two cells.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate lies outside the grid. Intended for
    /// hot loops whose indices are derived from [`side`](Grid::side).
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        assert!(
            a.0 < self.side && a.1 < self.side && b.0 < self.side && b.1 < self.side,
            "swap coordinates {a:?}/{b:?} out of bounds for side {}",
            self.side
        );
        let (i, j) = (self.idx(a.0, a.1), self.idx(b.0, b.1));
        self.cells.swap(i, j);
    }

    /// The cells as a flat row-major slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = i64;

    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) out of bounds for side {}",
            self.side
        );
        &self.cells[row * self.side + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) out of bounds for side {}",
            self.side
        );
        let i = self.idx(row, col);
        &mut self.cells[i]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
