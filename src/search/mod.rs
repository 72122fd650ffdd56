//! Search module for Gobang AI
//!
//! Contains:
//! - Candidate generation restricted to the neighbourhood of existing stones
//! - Fixed-depth negamax with forced-win shortcuts

pub mod candidates;
pub mod negamax;

pub use candidates::{gen_candidates, CANDIDATE_RADIUS};
pub use negamax::{best_move, SearchResult, Searcher, NO_MOVE_SCORE, WIN_SCORE};
