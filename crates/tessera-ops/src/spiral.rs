//! Clockwise outside-in spiral read-out.
//!
//! Walks the top row left-to-right, the right column top-to-bottom,
//! the bottom row right-to-left, and the left column bottom-to-top,
//! shrinking the active boundary after each full ring. The
//! single-remaining-row and single-remaining-column endgames are
//! guarded so no cell is visited twice or skipped.

use tessera_core::Grid;

/// Read every cell of `grid` exactly once in clockwise inward spiral
/// order, starting at the top-left corner.
///
/// The grid is not mutated; the returned vector is freshly allocated
/// and owned by the caller. A side-0 grid yields an empty vector; a
/// side-1 grid yields its single cell.
pub fn spiral_order(grid: &Grid) -> Vec<i64> {
    let side = grid.side();
    let mut out = Vec::with_capacity(grid.cell_count());
    if side == 0 {
        return out;
    }

    let (mut top, mut bottom) = (0, side - 1);
    let (mut left, mut right) = (0, side - 1);

    loop {
        // Top row, left to right.
        for c in left..=right {
            out.push(grid[(top, c)]);
        }
        if top == bottom {
            break;
        }
        top += 1;

        // Right column, top to bottom.
        for r in top..=bottom {
            out.push(grid[(r, right)]);
        }
        if left == right {
            break;
        }
        right -= 1;

        // Bottom row, right to left.
        for c in (left..=right).rev() {
            out.push(grid[(bottom, c)]);
        }
        if top == bottom {
            break;
        }
        bottom -= 1;

        // Left column, bottom to top.
        for r in (top..=bottom).rev() {
            out.push(grid[(r, left)]);
        }
        if left == right {
            break;
        }
        left += 1;
    }

    out
}
