//! Error types for board construction, real games and configuration

use std::path::PathBuf;

use crate::board::Disc;

/// Errors that can occur when building a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    EmptyDimension { rows: u8, cols: u8 },

    #[error("board {rows}x{cols} exceeds {max} cells")]
    TooManyCells { rows: u8, cols: u8, max: usize },
}

/// Errors that can occur while driving a real game.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("column {col} is not playable (legal: {legal:?})")]
    IllegalMove { col: u8, legal: Vec<u8> },

    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Disc },

    #[error("game is already over")]
    GameOver,

    #[error("the human must play yellow or red (got {disc})")]
    InvalidHuman { disc: Disc },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Game(#[from] GameError),
}
