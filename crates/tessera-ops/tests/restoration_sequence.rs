//! Integration tests for the full restoration walkthrough.
//!
//! These exercise complete pipelines over the canonical murals, not
//! individual restorations in isolation. Expected grids were worked out
//! by hand from the transformation contracts.

use tessera_core::Grid;
use tessera_ops::{
    spiral_order, Pipeline, Restoration, RotateClockwise, RowRotate, Transpose, ZeroPropagation,
};
use tessera_test_utils::{unity_mural, victory_mural};

fn unity_pipeline(side: usize) -> Pipeline {
    Pipeline::new(
        vec![
            Box::new(Transpose),
            Box::new(RotateClockwise),
            Box::new(ZeroPropagation),
        ],
        side,
    )
    .unwrap()
}

#[test]
fn unity_walkthrough_restores_the_mural() {
    let mut mural = unity_mural();
    let report = unity_pipeline(mural.side()).run(&mut mural).unwrap();
    assert_eq!(report.len(), 3);

    // The mural's two blank tiles sit at (1, 3) and (5, 1). Transpose
    // carries them to (3, 1) and (1, 5); the quarter turn carries them
    // on to (1, 2) and (5, 4). Zero-propagation therefore blanks rows
    // {1, 5} and columns {2, 4} of the rotated grid.
    let expected = Grid::from_rows(&[
        vec![8, 5, 0, 7, 0, 12],
        vec![0, 0, 0, 0, 0, 0],
        vec![19, 6, 0, 13, 0, 21],
        vec![17, 3, 0, 24, 0, 15],
        vec![30, 23, 0, 28, 0, 8],
        vec![0, 0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(mural, expected);
    assert_eq!(report.final_grid(), Some(&expected));
}

#[test]
fn unity_intermediate_snapshots_trace_the_blanks() {
    let mut mural = unity_mural();
    let report = unity_pipeline(mural.side()).run(&mut mural).unwrap();

    let transposed = report.stage("Transpose").unwrap();
    assert_eq!(transposed.get(3, 1), Some(0));
    assert_eq!(transposed.get(1, 5), Some(0));

    let rotated = report.stage("RotateClockwise").unwrap();
    assert_eq!(rotated.get(1, 2), Some(0));
    assert_eq!(rotated.get(5, 4), Some(0));

    // Zero-propagation operated on the rotated positions, not the
    // original literal's: rows 1 and 5, columns 2 and 4.
    let cleaned = report.stage("ZeroPropagation").unwrap();
    for i in 0..6 {
        assert_eq!(cleaned.get(1, i), Some(0), "row 1, col {i}");
        assert_eq!(cleaned.get(5, i), Some(0), "row 5, col {i}");
        assert_eq!(cleaned.get(i, 2), Some(0), "row {i}, col 2");
        assert_eq!(cleaned.get(i, 4), Some(0), "row {i}, col 4");
    }
    // An untouched line keeps its rotated values.
    assert_eq!(cleaned.row(0), Some(&[8, 5, 0, 7, 0, 12][..]));
}

#[test]
fn victory_row_rotation_and_spiral_message() {
    let mut mural = victory_mural();
    let shift = RowRotate::builder().row(3).steps(2).build().unwrap();
    let pipeline = Pipeline::new(vec![Box::new(shift)], mural.side()).unwrap();
    pipeline.run(&mut mural).unwrap();

    assert_eq!(mural.row(3), Some(&[23, 24, 19, 20, 21, 22][..]));
    // Every other row is untouched.
    assert_eq!(mural.row(2), Some(&[13, 14, 15, 16, 17, 18][..]));
    assert_eq!(mural.row(4), Some(&[25, 26, 27, 28, 29, 30][..]));

    let message = spiral_order(&mural);
    assert_eq!(
        message,
        vec![
            1, 2, 3, 4, 5, 6, 12, 18, 22, 30, 36, 35, 34, 33, 32, 31, 25, 23, 13, 7, 8, 9, 10,
            11, 17, 21, 29, 28, 27, 26, 24, 14, 15, 16, 20, 19,
        ]
    );
}

#[test]
fn walkthrough_is_deterministic() {
    let run = || {
        let mut mural = unity_mural();
        unity_pipeline(mural.side()).run(&mut mural).unwrap();
        mural
    };
    assert_eq!(run(), run());
}

#[test]
fn row_rotation_outside_the_grid_is_rejected_up_front() {
    let shift = RowRotate::builder().row(6).steps(2).build().unwrap();
    let result = Pipeline::new(vec![Box::new(shift) as Box<dyn Restoration>], 6);
    assert!(result.is_err(), "row 6 of a side-6 grid must be rejected");
}
