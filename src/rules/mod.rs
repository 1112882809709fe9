//! Scoring rules for Connect Four
//!
//! This module implements:
//! - Line (window) enumeration in all four axes
//! - Counting of fully owned four-cell windows
//! - Scoreboard and final outcome of a filled board
//!
//! A game ends only when the board is full; the player owning more aligned
//! fours at that point wins.

pub mod lines;
pub mod outcome;

// Re-exports for convenient access
pub use lines::{count_aligned, lines, Line, DIRECTIONS, WINDOW_LEN};
pub use outcome::{outcome, Outcome, Scoreboard};
