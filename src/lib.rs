//! Connect Four AI engine
//!
//! A game-tree engine for gravity-drop connection games on boards of up to
//! 64 cells (standard 6x7 by default):
//! - Discs drop to the lowest empty row of a column
//! - Every fully-owned 4-cell window scores a point; the higher count wins
//!   once the board is full
//! - The engine searches with plain minimax, alpha-beta, or expected minimax
//!   where its own moves may slip to a neighbouring column
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Window enumeration, aligned-four counting and final outcome
//! - [`eval`]: Windowed heuristic evaluation
//! - [`search`]: Move simulation, the three searches and the search trace
//! - [`engine`]: Move selection entry point dispatching by algorithm
//! - [`game`]: Human-versus-engine session with turn bookkeeping
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{AIEngine, Board, SearchType};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(SearchType::AlphaBeta, 4, None);
//!
//! // Human opens in the center
//! board.play(3);
//!
//! // AI responds as Red
//! let color = board.current_player();
//! if let Some(col) = engine.get_move(&mut board, color) {
//!     board.play(col);
//!     println!("AI plays column {col}");
//! }
//! ```
//!
//! # Search
//!
//! All strategies iterate columns in ascending order and only replace the
//! best move on strict improvement, so ties resolve to the lowest column and
//! alpha-beta returns exactly what minimax returns. A search is terminal only
//! when the board is full; four in a row does not end it.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Pos, DEFAULT_COLS, DEFAULT_ROWS};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, GameError};
pub use game::Game;
pub use rules::{Outcome, Scoreboard};
pub use search::{SearchResult, Searcher, Trace};
