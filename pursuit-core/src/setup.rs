//! Starting positions

use rand::Rng;

use crate::board::Position;
use crate::config::Mode;

/// Corner-biased placement for a fresh game
///
/// Blue always starts in column 0 and red in column `size - 1`. The
/// attacker takes a random corner row on its side; the other point starts
/// on the same row or the row next to it, with equal probability.
/// Returns `(blue, red)`.
pub fn initialize_positions<R: Rng>(mode: Mode, size: i8, rng: &mut R) -> (Position, Position) {
    let last = size - 1;
    let corner_row = if rng.gen_bool(0.5) { 0 } else { last };
    let near_row = if rng.gen_bool(0.5) {
        corner_row
    } else if corner_row == 0 {
        1
    } else {
        corner_row - 1
    };

    match mode {
        Mode::Offense | Mode::TwoPlayer => (Position::new(0, corner_row), Position::new(last, near_row)),
        Mode::Defense => (Position::new(0, near_row), Position::new(last, corner_row)),
    }
}
