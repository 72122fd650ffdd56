//! Candidate move generation
//!
//! Only empty cells near existing stones are worth searching. Restricting the
//! move list to a 5x5 neighbourhood around every stone keeps the branching
//! factor small without ever producing an illegal move.

use std::collections::BTreeSet;

use crate::board::{Board, Pos};

/// Chebyshev radius around each stone
pub const CANDIDATE_RADIUS: i32 = 2;

/// Generate candidate moves for `board`.
///
/// Returns distinct empty cells within [`CANDIDATE_RADIUS`] of any stone, in
/// ascending row-major order. An empty board yields only the center; a full
/// board yields nothing.
pub fn gen_candidates(board: &Board) -> Vec<Pos> {
    let mut set = BTreeSet::new();

    for (pos, _) in board.stones() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let Some(near) = Pos::try_new(i32::from(pos.row) + dr, i32::from(pos.col) + dc)
                else {
                    continue;
                };
                if board.is_empty(near) {
                    set.insert(near);
                }
            }
        }
    }

    if set.is_empty() && board.is_board_empty() {
        return vec![Pos::center()];
    }
    set.into_iter().collect()
}
