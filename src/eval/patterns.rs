//! Pattern scores for Gobang evaluation
//!
//! A pattern is a run of same-colored stones plus the number of open ends
//! around it. Longer and more open runs score higher.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 10_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 5_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 1_000;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
}

/// Score a run of `len` stones with `open_ends` empty neighbours.
///
/// Anything not in the table (closed twos, singles, dead runs) is worth 0.
#[inline]
pub fn pattern_score(len: usize, open_ends: u8) -> i32 {
    match (len, open_ends) {
        (len, _) if len >= 5 => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        _ => 0,
    }
}
