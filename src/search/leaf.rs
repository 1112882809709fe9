//! Terminal and horizon detection shared by all strategies

use crate::board::{Board, Disc};

use super::Score;

/// Why a node stops branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf {
    /// Board full: no legal moves remain
    Terminal,
    /// Depth budget exhausted on a non-full board
    Horizon,
}

/// Classify a position and value it from `maximizer`'s perspective.
///
/// A full board is terminal at any depth and is valued by the aligned-four
/// differential. Otherwise depth 0 is the horizon, valued by the window
/// heuristic. Four in a row alone never ends the search.
pub fn classify(board: &Board, depth: u8, maximizer: Disc) -> Option<(Leaf, Score)> {
    if board.is_full() {
        let diff = i64::from(board.count_aligned(maximizer))
            - i64::from(board.count_aligned(maximizer.opponent()));
        return Some((Leaf::Terminal, diff as Score));
    }
    if depth == 0 {
        return Some((Leaf::Horizon, Score::from(board.evaluate_heuristic(maximizer))));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_node() {
        let board = Board::new();
        assert_eq!(classify(&board, 3, Disc::Yellow), None);
    }

    #[test]
    fn test_horizon_uses_heuristic() {
        let mut board = Board::new();
        board.place(0, Disc::Yellow);
        assert_eq!(
            classify(&board, 0, Disc::Yellow),
            Some((Leaf::Horizon, 3.0))
        );
        assert_eq!(classify(&board, 0, Disc::Red), Some((Leaf::Horizon, -3.0)));
    }

    #[test]
    fn test_full_board_is_terminal_regardless_of_depth() {
        let mut board = Board::with_size(1, 4).unwrap();
        for col in 0..4 {
            board.place(col, Disc::Red);
        }
        assert_eq!(classify(&board, 5, Disc::Red), Some((Leaf::Terminal, 1.0)));
        assert_eq!(classify(&board, 0, Disc::Yellow), Some((Leaf::Terminal, -1.0)));
    }

    #[test]
    fn test_four_in_a_row_is_not_terminal() {
        // Documented behavior: only a full board ends the search.
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Disc::Yellow);
        }
        assert_eq!(board.count_aligned(Disc::Yellow), 1);
        assert_eq!(classify(&board, 2, Disc::Yellow), None);
    }
}
