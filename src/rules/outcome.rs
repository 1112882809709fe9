//! Scoreboard and end-of-game result

use crate::board::{Board, Disc};

use super::lines::{count_aligned, WINDOW_LEN};

/// Aligned-four counts for both discs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub yellow: u32,
    pub red: u32,
}

impl Scoreboard {
    pub fn of(board: &Board) -> Self {
        Self {
            yellow: count_aligned(board, Disc::Yellow, WINDOW_LEN),
            red: count_aligned(board, Disc::Red, WINDOW_LEN),
        }
    }

    /// Score for a color
    #[inline]
    pub fn get(&self, disc: Disc) -> u32 {
        match disc {
            Disc::Yellow => self.yellow,
            Disc::Red => self.red,
            Disc::Empty => 0,
        }
    }

    /// Disc currently ahead, if any
    pub fn leader(&self) -> Option<Disc> {
        match self.yellow.cmp(&self.red) {
            std::cmp::Ordering::Greater => Some(Disc::Yellow),
            std::cmp::Ordering::Less => Some(Disc::Red),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Disc),
    Draw,
}

/// Result once the board is full, `None` while moves remain.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !board.is_full() {
        return None;
    }
    Some(match Scoreboard::of(board).leader() {
        Some(disc) => Outcome::Winner(disc),
        None => Outcome::Draw,
    })
}
