//! Main AI engine wrapping the search with a move policy
//!
//! The engine picks a move in three steps:
//!
//! 1. **Immediate win**: if the negamax choice completes five, play it
//! 2. **Block**: if the opponent could complete five next move, take that cell
//! 3. **Negamax**: otherwise play the negamax choice
//!
//! # Example
//!
//! ```
//! use gobang::{AIEngine, Board, Player, Pos};
//!
//! let mut engine = AIEngine::with_depth(1).unwrap();
//! let mut board = Board::new();
//! board.place(7, 7, Player::Black);
//!
//! let result = engine.get_move_with_stats(&board, Player::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::error::EngineError;
use crate::rules::check_win;
use crate::search::{gen_candidates, Searcher, WIN_SCORE};

/// Default search depth
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search the settings allow. Cost grows as candidates^depth.
pub const MAX_DEPTH: u8 = 5;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Negamax depth in plies, at least 1
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.depth == 0 {
            return Err(EngineError::InvalidDepth { depth: self.depth });
        }
        Ok(())
    }
}

/// Which step of the move policy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The chosen move completes five
    ImmediateWin,
    /// Blocks a cell where the opponent would complete five
    Block,
    /// Regular negamax search result
    Negamax,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Negamax score of the searched move
    pub score: i32,
    /// Policy step that chose the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// AI engine for Gobang.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(),
            config,
        })
    }

    /// Create an engine searching `depth` plies.
    pub fn with_depth(depth: u8) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig { depth })
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when there is nowhere left to play.
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let mut scratch = board.clone();

        // Depth is validated on construction
        let searched = self.searcher.run(&mut scratch, player, self.config.depth);

        let mut result = MoveResult {
            best_move: searched.best_move,
            score: searched.score,
            search_type: SearchType::Negamax,
            time_ms: 0,
            nodes: searched.nodes,
        };

        if searched
            .best_move
            .is_some_and(|pos| check_win(board, pos, player))
        {
            result.search_type = SearchType::ImmediateWin;
            result.score = WIN_SCORE;
        } else if let Some(pos) = find_block(board, player) {
            debug!(?pos, "blocking opponent five");
            result.best_move = Some(pos);
            result.search_type = SearchType::Block;
        }

        result.time_ms = start.elapsed().as_millis() as u64;
        info!(
            ?player,
            best_move = ?result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First candidate cell where `player`'s opponent would complete five.
fn find_block(board: &Board, player: Player) -> Option<Pos> {
    let opponent = player.opponent();
    gen_candidates(board)
        .into_iter()
        .find(|&pos| board.is_empty(pos) && check_win(board, pos, opponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(i32, i32)], player: Player) {
        for &(r, c) in stones {
            assert!(board.place(r, c, player));
        }
    }

    #[test]
    fn test_engine_new() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_engine_rejects_depth_zero() {
        assert_eq!(
            AIEngine::with_depth(0).unwrap_err(),
            EngineError::InvalidDepth { depth: 0 }
        );
        assert!(EngineConfig { depth: 0 }.validate().is_err());
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut engine = AIEngine::with_depth(1).unwrap();
        let board = Board::new();
        let result = engine.get_move_with_stats(&board, Player::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Negamax);
    }

    #[test]
    fn test_immediate_win() {
        let mut engine = AIEngine::with_depth(1).unwrap();
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (3, 3), (4, 4), (5, 5)], Player::White);
        place_all(&mut board, &[(1, 1), (9, 9)], Player::Black);

        let result = engine.get_move_with_stats(&board, Player::White);
        assert_eq!(result.best_move, Some(Pos::new(6, 6)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_four() {
        // Depth 1 does not look at replies, so the block step must step in
        let mut engine = AIEngine::with_depth(1).unwrap();
        let mut board = Board::new();
        place_all(&mut board, &[(10, 3), (10, 4), (10, 5), (10, 6)], Player::Black);
        place_all(&mut board, &[(10, 2), (4, 4)], Player::White);

        let result = engine.get_move_with_stats(&board, Player::White);
        assert_eq!(result.best_move, Some(Pos::new(10, 7)));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_own_win_beats_block() {
        let mut engine = AIEngine::with_depth(1).unwrap();
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Player::Black);
        place_all(&mut board, &[(5, 5), (5, 6), (5, 7), (5, 8)], Player::White);

        let result = engine.get_move_with_stats(&board, Player::Black);
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_get_move_leaves_board_untouched() {
        let mut engine = AIEngine::with_depth(2).unwrap();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 7)], Player::Black);
        place_all(&mut board, &[(7, 8)], Player::White);
        let snapshot = board.clone();

        let pos = engine.get_move(&board, Player::White).unwrap();
        assert!(board.is_empty(pos));
        assert_eq!(board, snapshot);
    }
}
