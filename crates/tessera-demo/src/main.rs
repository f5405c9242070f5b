//! Mural restoration walkthrough.
//!
//! Runs the fixed demonstration to completion: restore the Mural of
//! Unity with a transpose → quarter-turn → zero-propagation pipeline,
//! restore the Mural of Victory with a single row shift, then read out
//! its spiral message. Narration and a grid rendering follow each
//! stage. Takes no arguments and always exits 0.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tessera::prelude::*;

/// Interchangeable conservator greetings. Which one opens the run
/// depends on the wall-clock seed; the algorithms never touch the RNG.
const GREETINGS: [&str; 3] = [
    "Dear Conservator, the murals of Azura have faded and slipped. \
     Their stories depend on your steady hands!",
    "Welcome back to the atelier, Conservator. Two murals of Azura \
     await your attention today.",
    "The city of Azura sends word, Conservator: the Murals of Unity \
     and Victory must be restored before the unveiling!",
];

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!();
    println!("{}", GREETINGS[rng.random_range(0..GREETINGS.len())]);
    println!("=================================================================");
    println!();

    restore_unity();
    restore_victory();
}

/// The Mural of Unity: re-seat the tiles, turn the panel, then scrub
/// every course that held a blank tile.
fn restore_unity() {
    let mut mural = Grid::from_rows(&[
        vec![12, 3, 7, 14, 5, 8],
        vec![9, 16, 11, 0, 2, 18],
        vec![21, 4, 13, 22, 6, 19],
        vec![15, 10, 24, 20, 3, 17],
        vec![8, 26, 28, 1, 23, 30],
        vec![31, 0, 34, 33, 29, 25],
    ])
    .unwrap();

    println!("The Mural of Unity, as it arrived:");
    println!("{mural}");
    println!();

    let pipeline = Pipeline::new(
        vec![
            Box::new(Transpose),
            Box::new(RotateClockwise),
            Box::new(ZeroPropagation),
        ],
        mural.side(),
    )
    .unwrap();

    pipeline
        .run_with(&mut mural, |stage, grid| {
            println!("{}", stage_caption(stage));
            println!("{grid}");
            println!();
        })
        .unwrap();

    println!("The Mural of Unity stands whole again!");
    println!();
}

/// The Mural of Victory: one course slipped two tiles; slide it back,
/// then read the secret out along the spiral.
fn restore_victory() {
    let mut mural = Grid::from_row_major(6, (1..=36).collect()).unwrap();

    println!("Now for the Mural of Victory, as it arrived:");
    println!("{mural}");
    println!();

    let shift = RowRotate::builder().row(3).steps(2).build().unwrap();
    let pipeline = Pipeline::new(vec![Box::new(shift)], mural.side()).unwrap();
    pipeline
        .run_with(&mut mural, |_, grid| {
            println!("After sliding the fourth course two tiles to the right:");
            println!("{grid}");
            println!();
        })
        .unwrap();

    println!("The Mural of Victory stands whole again!");
    println!("Its secret reads out along the spiral:");
    println!();

    let message: Vec<String> = spiral_order(&mural)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("{}", message.join(" "));
}

fn stage_caption(stage: &str) -> &'static str {
    match stage {
        "Transpose" => "After re-seating the tiles across the diagonal:",
        "RotateClockwise" => "After turning the panel a quarter clockwise:",
        "ZeroPropagation" => "After scrubbing every course that held a blank tile:",
        _ => "After an unplanned restoration step:",
    }
}
