//! Board structure with gravity and turn tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Disc, Pos, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
use crate::error::BoardError;
use crate::eval::evaluate;
use crate::rules::count_aligned;

/// Game board. Discs fall to the lowest empty row of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Yellow discs bitboard
    yellow: Bitboard,
    /// Red discs bitboard
    red: Bitboard,
    /// Number of occupied rows per column
    heights: Vec<u8>,
    current_player: Disc,
    game_over: bool,
}

impl Board {
    /// Empty 6x7 board with yellow to move.
    pub fn new() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Empty board of custom dimensions.
    pub fn with_size(rows: u8, cols: u8) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimension { rows, cols });
        }
        if usize::from(rows) * usize::from(cols) > MAX_CELLS {
            return Err(BoardError::TooManyCells {
                rows,
                cols,
                max: MAX_CELLS,
            });
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            yellow: Bitboard::new(),
            red: Bitboard::new(),
            heights: vec![0; cols as usize],
            current_player: Disc::Yellow,
            game_over: false,
        }
    }

    /// Replay a sequence of real moves on an empty 6x7 board.
    ///
    /// Returns `None` if any column in the sequence is illegal when played.
    pub fn from_moves(moves: &[u8]) -> Option<Self> {
        let mut board = Self::new();
        for &col in moves {
            board.play(col)?;
        }
        Some(board)
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.col as usize * self.rows as usize + pos.row as usize
    }

    /// Check that a signed coordinate lies on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.rows) && col >= 0 && col < i32::from(self.cols)
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        let idx = self.index(pos);
        if self.yellow.get(idx) {
            Disc::Yellow
        } else if self.red.get(idx) {
            Disc::Red
        } else {
            Disc::Empty
        }
    }

    /// Whose turn it is in the real game.
    #[inline]
    pub fn current_player(&self) -> Disc {
        self.current_player
    }

    /// True once a real move has filled the board.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of discs in a column
    #[inline]
    pub fn height(&self, col: u8) -> u8 {
        self.heights[col as usize]
    }

    /// A column accepts a disc while its top row is empty.
    #[inline]
    pub fn is_valid_move(&self, col: u8) -> bool {
        col < self.cols && self.heights[col as usize] < self.rows
    }

    /// Legal columns in ascending order. Empty when the board is full.
    pub fn valid_moves(&self) -> Vec<u8> {
        (0..self.cols).filter(|&c| self.is_valid_move(c)).collect()
    }

    /// Every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.disc_count() as usize == self.cells()
    }

    /// Number of cells on the board
    #[inline]
    pub fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Drop `disc` into `col` and return the row it landed on.
    ///
    /// Declines with `None` for an illegal column. Turn order is the caller's business.
    pub fn place(&mut self, col: u8, disc: Disc) -> Option<u8> {
        if !self.is_valid_move(col) {
            return None;
        }
        let row = self.heights[col as usize];
        let idx = self.index(Pos::new(row, col));
        match disc {
            Disc::Yellow => self.yellow.set(idx),
            Disc::Red => self.red.set(idx),
            Disc::Empty => return None,
        }
        self.heights[col as usize] += 1;
        Some(row)
    }

    /// Clear a cell produced by [`Board::place`]. Only the topmost disc of a column may be removed.
    pub fn remove(&mut self, pos: Pos) {
        debug_assert_eq!(
            self.heights[pos.col as usize],
            pos.row + 1,
            "remove must target the top disc of column {}",
            pos.col
        );
        let idx = self.index(pos);
        self.yellow.clear(idx);
        self.red.clear(idx);
        self.heights[pos.col as usize] = pos.row;
    }

    /// Make a real move for the side to move.
    ///
    /// Switches the turn unless the move filled the board, in which case the game is over.
    pub fn play(&mut self, col: u8) -> Option<Pos> {
        if self.game_over {
            return None;
        }
        let row = self.place(col, self.current_player)?;
        if self.is_full() {
            self.game_over = true;
        } else {
            self.current_player = self.current_player.opponent();
        }
        Some(Pos::new(row, col))
    }

    /// Back to an empty board with yellow to move.
    pub fn reset(&mut self) {
        *self = Self::empty(self.rows, self.cols);
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.yellow.count() + self.red.count()
    }

    /// Number of fully owned four-cell windows for `disc`.
    pub fn count_aligned(&self, disc: Disc) -> u32 {
        count_aligned(self, disc, 4)
    }

    /// Window heuristic from `disc`'s point of view.
    pub fn evaluate_heuristic(&self, disc: Disc) -> i32 {
        evaluate(self, disc)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            write!(f, "|")?;
            for col in 0..self.cols {
                write!(f, "{}|", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(self.cols as usize * 2 + 1))?;
        let footer: Vec<String> = (0..self.cols).map(|c| c.to_string()).collect();
        write!(f, " {}", footer.join(" "))
    }
}
