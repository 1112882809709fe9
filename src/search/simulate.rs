//! Hypothetical moves for search, undone on scope exit

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Disc, Pos};

/// Drop `disc` into `col` without touching turn bookkeeping.
///
/// Returns the cell written, or `None` if the column is full or off the board.
#[inline]
pub fn simulate(board: &mut Board, col: u8, disc: Disc) -> Option<Pos> {
    board.place(col, disc).map(|row| Pos::new(row, col))
}

/// Clear a cell written by [`simulate`]. A declined simulation is a no-op.
#[inline]
pub fn undo(board: &mut Board, pos: Option<Pos>) {
    if let Some(pos) = pos {
        board.remove(pos);
    }
}

/// A simulated move that is undone when dropped.
///
/// Derefs to the board so the recursion can keep exploring through it; early
/// exits (pruning breaks, `?`) still restore the board.
pub struct Simulated<'b> {
    board: &'b mut Board,
    pos: Pos,
}

impl<'b> Simulated<'b> {
    pub fn apply(board: &'b mut Board, col: u8, disc: Disc) -> Option<Self> {
        let pos = simulate(board, col, disc)?;
        Some(Self { board, pos })
    }

    /// Cell the simulated disc landed on
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Simulated<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Simulated<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Simulated<'_> {
    fn drop(&mut self) {
        undo(self.board, Some(self.pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_and_undo() {
        let mut board = Board::new();
        let before = board.clone();
        let pos = simulate(&mut board, 4, Disc::Red);
        assert_eq!(pos, Some(Pos::new(0, 4)));
        assert_eq!(board.get(Pos::new(0, 4)), Disc::Red);
        assert_eq!(board.current_player(), Disc::Yellow);
        undo(&mut board, pos);
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulate_full_column_is_noop() {
        let mut board = Board::new();
        for _ in 0..6 {
            board.place(1, Disc::Yellow);
        }
        let before = board.clone();
        let pos = simulate(&mut board, 1, Disc::Red);
        assert_eq!(pos, None);
        undo(&mut board, pos);
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let mut child = Simulated::apply(&mut board, 3, Disc::Yellow).unwrap();
            assert_eq!(child.pos(), Pos::new(0, 3));
            assert_eq!(child.height(3), 1);
            let grandchild = Simulated::apply(&mut child, 3, Disc::Red).unwrap();
            assert_eq!(grandchild.get(Pos::new(1, 3)), Disc::Red);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_undoes_on_early_exit() {
        fn explore(board: &mut Board) -> Option<u8> {
            for col in board.valid_moves() {
                let child = Simulated::apply(board, col, Disc::Yellow)?;
                if child.pos().col == 2 {
                    return Some(col);
                }
            }
            None
        }
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(explore(&mut board), Some(2));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_declines_illegal_column() {
        let mut board = Board::new();
        assert!(Simulated::apply(&mut board, 7, Disc::Yellow).is_none());
    }
}
