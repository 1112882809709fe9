//! Board representation for Connect Four

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Reference board height
pub const DEFAULT_ROWS: u8 = 6;
/// Reference board width
pub const DEFAULT_COLS: u8 = 7;
/// Largest supported cell count (one `u64` mask per disc)
pub const MAX_CELLS: usize = 64;

/// Disc colors. Yellow always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    Empty,
    Yellow,
    Red,
}

impl Disc {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Yellow => Disc::Red,
            Disc::Red => Disc::Yellow,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Single-character symbol used by the text renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Disc::Yellow => 'X',
            Disc::Red => 'O',
            Disc::Empty => ' ',
        }
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Disc::Yellow => "yellow",
            Disc::Red => "red",
            Disc::Empty => "empty",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Disc {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yellow" | "x" => Ok(Disc::Yellow),
            "red" | "o" => Ok(Disc::Red),
            other => Err(format!("unknown disc color '{other}' (expected yellow or red)")),
        }
    }
}

/// Cell on the board. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}
