//! Win condition checking
//!
//! A player wins with five or more stones in a row along any of the four
//! line directions. Overlines (six or more) also win.

use crate::board::{Board, Player, Pos, Stone, DIRECTIONS};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Check whether signed coordinates fall on the board
#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    Pos::is_valid(row, col)
}

/// A run of same-colored stones through one cell along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Stones in the run, the starting cell included
    pub len: usize,
    /// Ends whose next cell is on the board and empty (0..=2)
    pub open_ends: u8,
}

/// Measure the run of `stone` through `pos` along `dir`, scanning both senses.
///
/// The starting cell counts once whatever it holds, so scanning from an empty
/// cell tells how long the run would be after playing there.
#[inline]
pub fn scan_run(board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> Run {
    let mut len = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let step = (dir.0 * sign, dir.1 * sign);
        let mut next = pos.offset(step, 1);
        while let Some(p) = next {
            if board.get(p) != stone {
                break;
            }
            len += 1;
            next = p.offset(step, 1);
        }
        if next.is_some_and(|p| board.is_empty(p)) {
            open_ends += 1;
        }
    }

    Run { len, open_ends }
}

/// Fast five-in-a-row check centered on `pos`.
///
/// Only checks the 4 lines through the given position, so it must be called
/// right after `player` has played there.
#[inline]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    let stone = player.stone();
    DIRECTIONS
        .iter()
        .any(|&dir| scan_run(board, pos, dir, stone).len >= WIN_LENGTH)
}

/// Find the winning line through `pos`, ordered from one end to the other.
///
/// Returns every stone of the run (five or more) for the first direction that
/// wins, or `None` if `player` has no five through `pos`.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    let stone = player.stone();
    if board.get(pos) != stone {
        return None;
    }

    for &dir in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let mut next = pos.offset(dir, -1);
        while let Some(p) = next.filter(|&p| board.get(p) == stone) {
            line.insert(0, p);
            next = p.offset(dir, -1);
        }

        // Extend in positive direction
        let mut next = pos.offset(dir, 1);
        while let Some(p) = next.filter(|&p| board.get(p) == stone) {
            line.push(p);
            next = p.offset(dir, 1);
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
