//! Heuristic evaluation function for Gobang board positions
//!
//! Every stone is treated as a potential run start: for each stone and each
//! direction the run through it is scored. A run of length L is therefore
//! counted L times per direction, which weights long runs more heavily.

use crate::board::{Board, Player, DIRECTIONS};
use crate::rules::scan_run;

use super::patterns::pattern_score;

/// Sum of pattern scores for `player`'s stones. Always >= 0.
#[must_use]
pub fn evaluate_one_side(board: &Board, player: Player) -> i32 {
    let stone = player.stone();
    let mut score = 0;

    for (pos, owner) in board.stones() {
        if owner != player {
            continue;
        }
        for &dir in &DIRECTIONS {
            let run = scan_run(board, pos, dir, stone);
            score += pattern_score(run.len, run.open_ends);
        }
    }

    score
}

/// Evaluate the board from the perspective of the given player.
///
/// Positive values favour `player`. Symmetric:
/// `evaluate(board, A) == -evaluate(board, B)`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    evaluate_one_side(board, player) - evaluate_one_side(board, player.opponent())
}
