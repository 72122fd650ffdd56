//! Gobang (five-in-a-row) engine with a fixed-depth negamax AI
//!
//! Free-style rules on a 15x15 board:
//! - Black moves first
//! - Five or more in a row wins (overlines allowed)
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and speculative stone guards
//! - [`rules`]: Bounds checks and win detection
//! - [`eval`]: Pattern-based position evaluation
//! - [`search`]: Candidate generation and negamax search
//! - [`engine`]: Move policy on top of the search
//! - [`game`]: Turn handling and game modes
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gobang::{AIEngine, Board, Player};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_depth(1).unwrap();
//!
//! board.place(7, 7, Player::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Player::White) {
//!     board.place_at(pos, Player::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType};
pub use error::{EngineError, MoveError};
pub use game::{GameMode, GameResult, GameSettings, GameState};
