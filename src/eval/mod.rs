//! Evaluation module for Connect Four positions
//!
//! Scores a position at the search horizon by summing the value of every
//! four-cell window on the board. Windows containing both colors are dead and
//! score nothing.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{window_score, WindowScore};
