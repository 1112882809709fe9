//! Window enumeration over the four board axes

use crate::board::{Board, Disc, Pos};

/// Length of a scoring window
pub const WINDOW_LEN: u8 = 4;

/// Direction vectors as (row, col) steps, row 0 at the bottom
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal up-right
    (-1, 1), // Diagonal down-right
];

/// A contiguous run of `len` on-board cells along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub dir: (i32, i32),
    pub len: u8,
}

impl Line {
    /// Cells of the line, starting at `start`
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let (dr, dc) = self.dir;
        (0..i32::from(self.len)).map(move |i| {
            let row = i32::from(self.start.row) + dr * i;
            let col = i32::from(self.start.col) + dc * i;
            Pos::new(row as u8, col as u8)
        })
    }

    /// Count own and opposing discs in the line
    pub fn tally(self, board: &Board, disc: Disc) -> (u8, u8) {
        let opponent = disc.opponent();
        self.cells().fold((0, 0), |(own, opp), pos| match board.get(pos) {
            d if d == disc => (own + 1, opp),
            d if d == opponent => (own, opp + 1),
            _ => (own, opp),
        })
    }
}

/// Every line of length `len` that fits on the board, all four axes.
pub fn lines(board: &Board, len: u8) -> impl Iterator<Item = Line> + '_ {
    let span = i32::from(len) - 1;
    DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
        (0..board.cols()).flat_map(move |col| {
            (0..board.rows()).filter_map(move |row| {
                let end_row = i32::from(row) + dr * span;
                let end_col = i32::from(col) + dc * span;
                (len > 0 && board.contains(end_row, end_col)).then_some(Line {
                    start: Pos::new(row, col),
                    dir: (dr, dc),
                    len,
                })
            })
        })
    })
}

/// Count lines of length `len` entirely occupied by `disc`.
///
/// Overlapping lines each count, so five in a row scores two.
pub fn count_aligned(board: &Board, disc: Disc, len: u8) -> u32 {
    if disc == Disc::Empty {
        return 0;
    }
    lines(board, len)
        .filter(|line| line.cells().all(|pos| board.get(pos) == disc))
        .count() as u32
}
