//! Evaluation module for Gobang positions
//!
//! Line patterns (twos, threes, fours, fives) scored by length and openness.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_one_side};
pub use patterns::{pattern_score, PatternScore};
