//! Error types for the engine and game session

use crate::board::Pos;

/// Errors from configuring or running the search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Search depth must be at least 1, got {depth}")]
    InvalidDepth { depth: u8 },
}

/// Reasons a move cannot be played in the current game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Game is over")]
    GameOver,
    #[error("AI is thinking")]
    AiThinking,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("Position ({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),
}
