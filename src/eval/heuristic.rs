//! Heuristic evaluation function for Connect Four board positions
//!
//! Every four-cell window in the four axes contributes according to
//! [`window_score`]. The score is always from the perspective of `disc`.

use crate::board::{Board, Disc};
use crate::rules::{lines, WINDOW_LEN};

use super::patterns::window_score;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favour `disc`. Only windows occupied by a single color
/// count, so `evaluate(b, Yellow) == -evaluate(b, Red)` holds on every board.
#[must_use]
pub fn evaluate(board: &Board, disc: Disc) -> i32 {
    if disc == Disc::Empty {
        return 0;
    }
    lines(board, WINDOW_LEN)
        .map(|line| {
            let (own, opp) = line.tally(board, disc);
            window_score(own, opp)
        })
        .sum()
}
