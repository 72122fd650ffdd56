//! Board structure with last-move tracking

use std::ops::{Deref, DerefMut};

use super::{Player, Pos, Stone, BOARD_SIZE};

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    /// Last stone placed through `place` (speculative stones are not recorded)
    last_move: Option<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            last_move: None,
        }
    }

    /// Empty every cell and forget the last move
    pub fn reset(&mut self) {
        self.cells = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.last_move = None;
    }

    /// Place a stone for `player`.
    ///
    /// Returns `false` without touching the board when the cell is off the
    /// board or already occupied.
    pub fn place(&mut self, row: i32, col: i32, player: Player) -> bool {
        let Some(pos) = Pos::try_new(row, col) else {
            return false;
        };
        if !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.row as usize][pos.col as usize] = player.stone();
        self.last_move = Some(pos);
        true
    }

    /// Place a stone at a known-valid position
    #[inline]
    pub fn place_at(&mut self, pos: Pos, player: Player) -> bool {
        self.place(i32::from(pos.row), i32::from(pos.col), player)
    }

    /// Empty a cell. Off-board coordinates are ignored.
    pub fn clear(&mut self, row: i32, col: i32) {
        if let Some(pos) = Pos::try_new(row, col) {
            self.cells[pos.row as usize][pos.col as usize] = Stone::Empty;
            if self.last_move == Some(pos) {
                self.last_move = None;
            }
        }
    }

    /// Bounds-checked read
    #[inline]
    pub fn at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Iterate over every occupied cell in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |idx| {
            let pos = Pos::from_index(idx);
            self.get(pos).player().map(|p| (pos, p))
        })
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s != Stone::Empty)
            .count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is taken
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&s| s != Stone::Empty)
    }

    /// Put a stone down for the lifetime of the returned guard.
    ///
    /// The cell is emptied again when the guard drops, so speculative moves
    /// always unwind in LIFO order. `last_move` is left untouched.
    #[inline]
    pub fn try_stone(&mut self, pos: Pos, player: Player) -> StoneGuard<'_> {
        debug_assert!(self.is_empty(pos), "speculative stone on occupied cell {pos:?}");
        self.cells[pos.row as usize][pos.col as usize] = player.stone();
        StoneGuard { board: self, pos }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A stone placed by [`Board::try_stone`], removed on drop
pub struct StoneGuard<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl StoneGuard<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for StoneGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for StoneGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for StoneGuard<'_> {
    fn drop(&mut self) {
        self.board.cells[self.pos.row as usize][self.pos.col as usize] = Stone::Empty;
    }
}
