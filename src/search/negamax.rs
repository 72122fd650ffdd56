//! Fixed-depth negamax search
//!
//! Plain negamax without pruning: every candidate is searched to the given
//! depth. The only shortcut is a forced win, which returns at once.
//!
//! The board is searched in place. Each speculative stone lives in a
//! [`StoneGuard`](crate::board::StoneGuard), so it is removed on every exit
//! path and the caller always gets its board back unchanged.
//!
//! # Example
//!
//! ```
//! use gobang::board::{Board, Player};
//! use gobang::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(7, 7, Player::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Player::White, 1).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Player, Pos};
use crate::error::EngineError;
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_win;

use super::candidates::gen_candidates;

/// Score returned for a forced win
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Score for a node with no moves, below any reachable evaluation
pub const NO_MOVE_SCORE: i32 = -9_999_999;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board has no empty cell near play
    pub best_move: Option<Pos>,
    /// Negamax value of the best move for the side to move
    pub score: i32,
    /// Whether the move wins on the spot
    pub immediate_win: bool,
    /// Total nodes searched
    pub nodes: u64,
}

/// Negamax searcher. Holds only per-search statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` for `player` to the given depth.
    ///
    /// Depth 0 is rejected. The board is mutated during the search and
    /// restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
    ) -> Result<SearchResult, EngineError> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth { depth });
        }
        Ok(self.run(board, player, depth))
    }

    /// Search with an already validated depth (>= 1).
    pub(crate) fn run(&mut self, board: &mut Board, player: Player, depth: u8) -> SearchResult {
        debug_assert!(depth >= 1);
        self.nodes = 0;

        let (best_move, score, immediate_win) = self.root(board, player, depth);
        debug!(
            ?player,
            depth,
            ?best_move,
            score,
            nodes = self.nodes,
            "negamax search finished"
        );

        SearchResult {
            best_move,
            score,
            immediate_win,
            nodes: self.nodes,
        }
    }

    /// Root move loop. `depth` must be at least 1.
    fn root(&mut self, board: &mut Board, player: Player, depth: u8) -> (Option<Pos>, i32, bool) {
        let candidates = gen_candidates(board);
        let mut best: Option<Pos> = None;
        let mut best_val = NO_MOVE_SCORE;

        for &pos in &candidates {
            let mut guard = board.try_stone(pos, player);
            self.nodes += 1;

            // Forced win: take the first one found
            if check_win(&guard, pos, player) {
                trace!(?pos, "immediate win at root");
                return (Some(pos), WIN_SCORE, true);
            }

            let val = -self.negamax(&mut guard, depth - 1, player.opponent());
            drop(guard);
            trace!(?pos, val, "root move scored");

            // Strictly greater: first-seen wins ties
            if val > best_val {
                best_val = val;
                best = Some(pos);
            }
        }

        if best.is_none() {
            best = candidates.first().copied();
        }
        (best, best_val, false)
    }

    /// Negamax value of `board` for `player` with `depth` plies left.
    pub fn negamax(&mut self, board: &mut Board, depth: u8, player: Player) -> i32 {
        if depth == 0 {
            return evaluate(board, player);
        }

        let mut best = NO_MOVE_SCORE;
        for pos in gen_candidates(board) {
            let mut guard = board.try_stone(pos, player);
            self.nodes += 1;

            if check_win(&guard, pos, player) {
                return WIN_SCORE;
            }

            let val = -self.negamax(&mut guard, depth - 1, player.opponent());
            if val > best {
                best = val;
            }
        }
        best
    }
}

/// Best move for `player`, or `None` if there is nowhere to play.
///
/// Convenience wrapper around [`Searcher::search`].
pub fn best_move(board: &mut Board, player: Player, depth: u8) -> Result<Option<Pos>, EngineError> {
    Searcher::new()
        .search(board, player, depth)
        .map(|result| result.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn place_all(board: &mut Board, stones: &[(i32, i32)], player: Player) {
        for &(r, c) in stones {
            assert!(board.place(r, c, player));
        }
    }

    #[test]
    fn test_search_empty_board() {
        let mut board = Board::new();
        let result = Searcher::new().search(&mut board, Player::Black, 1).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_depth_zero_rejected() {
        let mut board = Board::new();
        let err = Searcher::new().search(&mut board, Player::Black, 0).unwrap_err();
        assert_eq!(err, EngineError::InvalidDepth { depth: 0 });
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut board = Board::new();
        // Four at the left edge: only (7,4) completes five
        place_all(&mut board, &[(7, 0), (7, 1), (7, 2), (7, 3)], Player::Black);
        place_all(&mut board, &[(9, 9), (10, 10)], Player::White);

        let result = Searcher::new().search(&mut board, Player::Black, 2).unwrap();
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
        assert!(result.immediate_win);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_open_four_completes_five() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7), (7, 8)], Player::Black);
        place_all(&mut board, &[(8, 6), (8, 7), (9, 9)], Player::White);

        let pos = best_move(&mut board, Player::Black, 2).unwrap().unwrap();
        assert!(pos == Pos::new(7, 4) || pos == Pos::new(7, 9));
        assert!(board.place_at(pos, Player::Black));
        assert!(check_win(&board, pos, Player::Black));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 8), (6, 9)], Player::Black);
        place_all(&mut board, &[(7, 8), (6, 6)], Player::White);
        let snapshot = board.clone();

        let mut searcher = Searcher::new();
        searcher.search(&mut board, Player::White, 2).unwrap();
        assert_eq!(board, snapshot);

        searcher.negamax(&mut board, 2, Player::Black);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_negamax_depth_zero_is_evaluation() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (7, 8)], Player::Black);
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.negamax(&mut board, 0, Player::Black),
            evaluate(&board, Player::Black)
        );
        assert_eq!(searcher.nodes(), 0);
    }

    #[test]
    fn test_negamax_reports_forced_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6)], Player::White);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.negamax(&mut board, 3, Player::White), WIN_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        // Striped fill: pairs of columns alternate color, no five anywhere
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let player = if (pos.col / 2 + pos.row % 2) % 2 == 0 {
                Player::Black
            } else {
                Player::White
            };
            board.place_at(pos, player);
        }
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::Black, 1).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, NO_MOVE_SCORE);
        assert_eq!(searcher.negamax(&mut board, 1, Player::Black), NO_MOVE_SCORE);
    }

    #[test]
    fn test_search_node_count() {
        let mut board = Board::new();
        board.place(7, 7, Player::Black);
        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::White, 1).unwrap();
        // One node per root candidate at depth 1
        assert_eq!(result.nodes, 24);
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        // Every reply to a lone stone evaluates to 0 at depth 1
        let mut board = Board::new();
        board.place(7, 7, Player::Black);
        let result = Searcher::new().search(&mut board, Player::White, 1).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_search_blocks_opponent_four() {
        // At depth 2 White must not ignore Black's four
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Player::Black);
        place_all(&mut board, &[(7, 3), (8, 8)], Player::White);

        let pos = best_move(&mut board, Player::White, 2).unwrap().unwrap();
        assert_eq!(pos, Pos::new(7, 8));
    }
}
