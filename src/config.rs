//! Application configuration, loadable from TOML
//!
//! ```toml
//! [board]
//! rows = 6
//! cols = 7
//!
//! [engine]
//! algorithm = "minimax_ab"
//! depth = 5
//! # seed = 42
//!
//! [game]
//! human = "yellow"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Disc, DEFAULT_COLS, DEFAULT_ROWS};
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: u8,
    pub cols: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm identifier; unknown values play randomly
    pub algorithm: String,
    pub depth: u8,
    /// Seed for the random fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: "minimax_ab".to_string(),
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Disc played by the human; yellow moves first
    pub human: Disc,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { human: Disc::Yellow }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation(
                "engine.depth must be >= 1".into(),
            ));
        }
        if self.game.human == Disc::Empty {
            return Err(ConfigError::Validation(
                "game.human must be yellow or red".into(),
            ));
        }
        self.new_board()?;
        Ok(())
    }

    /// Empty board with the configured dimensions.
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::with_size(self.board.rows, self.board.cols)?)
    }

    /// TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
