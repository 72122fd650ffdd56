//! Game rules for Gobang
//!
//! Standard free-style rules: five or more in a row wins, no forbidden moves.

pub mod win;

pub use win::{check_win, in_bounds, scan_run, winning_line, Run, WIN_LENGTH};
