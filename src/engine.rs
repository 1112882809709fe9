//! Move selection entry point
//!
//! [`AIEngine`] is the single operation the front end consumes: given a board,
//! the side to move and a [`SearchType`], it returns a legal column or `None`
//! when the board has no legal moves. The search type is resolved once here;
//! unknown identifiers degrade to a uniformly random legal column.
//!
//! # Example
//!
//! ```
//! use connect_four::{AIEngine, Board, Disc, SearchType};
//!
//! let mut engine = AIEngine::with_config(SearchType::AlphaBeta, 3, Some(7));
//! let mut board = Board::from_moves(&[3, 3]).unwrap();
//!
//! let result = engine.select_move(&mut board, Disc::Yellow, SearchType::AlphaBeta, 3);
//! println!("Best column: {:?}", result.column);
//! println!("Search type: {}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! assert!(board.is_valid_move(result.column.unwrap()));
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Disc};
use crate::config::EngineConfig;
use crate::search::{
    NoTrace, Score, SearchObserver, SearchResult, Searcher, Trace, TraceSummary,
};

/// Default search depth
pub const DEFAULT_DEPTH: u8 = 5;

/// Strategy used to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    /// Plain depth-limited minimax
    #[serde(rename = "minimax")]
    Minimax,
    /// Minimax with alpha-beta pruning
    #[serde(rename = "minimax_ab")]
    AlphaBeta,
    /// Expected minimax with unreliable execution of the engine's moves
    #[serde(rename = "expected_minimax")]
    ExpectedMinimax,
    /// Uniformly random legal column
    #[serde(rename = "random")]
    Random,
}

impl SearchType {
    /// The three tree searches, in identifier order
    pub const SEARCHES: [SearchType; 3] = [
        SearchType::Minimax,
        SearchType::AlphaBeta,
        SearchType::ExpectedMinimax,
    ];

    /// External identifier
    pub fn id(self) -> &'static str {
        match self {
            SearchType::Minimax => "minimax",
            SearchType::AlphaBeta => "minimax_ab",
            SearchType::ExpectedMinimax => "expected_minimax",
            SearchType::Random => "random",
        }
    }

    /// Resolve an identifier, degrading unknown ones to [`SearchType::Random`].
    ///
    /// ```
    /// use connect_four::SearchType;
    ///
    /// assert_eq!(SearchType::from_id("minimax_ab"), SearchType::AlphaBeta);
    /// assert_eq!(SearchType::from_id("mcts"), SearchType::Random);
    /// ```
    pub fn from_id(id: &str) -> Self {
        match id.parse() {
            Ok(search_type) => search_type,
            Err(_) => {
                log::warn!("unknown algorithm '{id}', falling back to random moves");
                SearchType::Random
            }
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchType::Minimax),
            "minimax_ab" => Ok(SearchType::AlphaBeta),
            "expected_minimax" => Ok(SearchType::ExpectedMinimax),
            "random" => Ok(SearchType::Random),
            _ => Err(format!("unknown algorithm: {s}")),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Column to play, `None` when no legal move exists
    pub column: Option<u8>,
    /// Root value of the search, `None` when no search ran
    pub score: Option<Score>,
    /// Strategy that was requested
    pub search_type: SearchType,
    /// Depth searched
    pub depth: u8,
    /// Positions visited
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Whether the column came from the random fallback
    pub random: bool,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(search_type: SearchType, depth: u8, time_ms: u64) -> Self {
        Self {
            column: None,
            score: None,
            search_type,
            depth,
            nodes: 0,
            cutoffs: 0,
            random: false,
            time_ms,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            column: result.best_move,
            score: Some(result.score),
            search_type,
            depth: result.depth,
            nodes: result.nodes,
            cutoffs: result.cutoffs,
            random: false,
            time_ms,
        }
    }

    /// Swap in a random column, keeping whatever statistics the search produced.
    #[inline]
    fn randomized(mut self, column: u8) -> Self {
        self.column = Some(column);
        self.random = true;
        self
    }
}

/// Connect Four AI engine.
///
/// Holds the default strategy and depth used by [`AIEngine::get_move`] and the
/// random source for the degraded fallback. The board passed in is explored in
/// place and handed back unchanged.
pub struct AIEngine {
    search_type: SearchType,
    max_depth: u8,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with alpha-beta at depth 5 and an OS-seeded random fallback.
    ///
    /// ```
    /// use connect_four::{AIEngine, SearchType};
    ///
    /// let engine = AIEngine::new();
    /// assert_eq!(engine.search_type(), SearchType::AlphaBeta);
    /// assert_eq!(engine.max_depth(), 5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchType::AlphaBeta, DEFAULT_DEPTH, None)
    }

    /// Engine with a custom default strategy and depth.
    ///
    /// `seed` fixes the random fallback for reproducible runs.
    #[must_use]
    pub fn with_config(search_type: SearchType, max_depth: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            search_type,
            max_depth,
            rng,
        }
    }

    /// Engine built from the `[engine]` configuration table.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(
            SearchType::from_id(&config.algorithm),
            config.depth,
            config.seed,
        )
    }

    /// Column for `color` using the configured strategy and depth.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, color: Disc) -> Option<u8> {
        let (search_type, depth) = (self.search_type, self.max_depth);
        self.select_move(board, color, search_type, depth).column
    }

    /// Select a column for `color` with an explicit strategy and depth.
    ///
    /// Returns `column == None` only when the board has no legal moves.
    /// Otherwise the column is always legal on `board`.
    #[must_use]
    pub fn select_move(
        &mut self,
        board: &mut Board,
        color: Disc,
        search_type: SearchType,
        depth: u8,
    ) -> MoveResult {
        self.run(board, color, search_type, depth, NoTrace).0
    }

    /// Like [`select_move`](Self::select_move) with the identifier resolved
    /// through [`SearchType::from_id`].
    #[must_use]
    pub fn select_move_by_id(
        &mut self,
        board: &mut Board,
        color: Disc,
        algorithm: &str,
        depth: u8,
    ) -> MoveResult {
        self.select_move(board, color, SearchType::from_id(algorithm), depth)
    }

    /// Like [`select_move`](Self::select_move), also returning the explored tree.
    ///
    /// The trace is empty when no search ran (no legal moves or random play)
    /// but always carries a summary.
    #[must_use]
    pub fn select_move_traced(
        &mut self,
        board: &mut Board,
        color: Disc,
        search_type: SearchType,
        depth: u8,
    ) -> (MoveResult, Trace) {
        let (result, mut trace) = self.run(board, color, search_type, depth, Trace::new());
        trace.set_summary(TraceSummary {
            algorithm: search_type.id().to_string(),
            depth: result.depth,
            value: result.score,
            column: result.column,
        });
        (result, trace)
    }

    fn run<O: SearchObserver>(
        &mut self,
        board: &mut Board,
        color: Disc,
        search_type: SearchType,
        depth: u8,
        observer: O,
    ) -> (MoveResult, O) {
        let start = Instant::now();
        let legal = board.valid_moves();
        if legal.is_empty() {
            log::debug!("{search_type}: no legal moves");
            let result = MoveResult::no_move(search_type, depth, elapsed_ms(start));
            return (result, observer);
        }

        let depth = if depth == 0 {
            log::warn!("search depth 0 requested, searching depth 1");
            1
        } else {
            depth
        };

        let mut searcher = Searcher::with_observer(color, observer);
        let searched = match search_type {
            SearchType::Minimax => Some(searcher.minimax(board, depth)),
            SearchType::AlphaBeta => Some(searcher.alpha_beta(board, depth)),
            SearchType::ExpectedMinimax => Some(searcher.expected_minimax(board, depth)),
            SearchType::Random => None,
        };
        let observer = searcher.into_observer();

        let mut result = match searched {
            Some(found) => MoveResult::from_search(found, search_type, elapsed_ms(start)),
            None => MoveResult::no_move(search_type, depth, elapsed_ms(start)),
        };
        if !result.column.is_some_and(|col| board.is_valid_move(col)) {
            if search_type != SearchType::Random {
                log::warn!(
                    "{search_type} produced no legal column ({:?}), playing randomly",
                    result.column
                );
            }
            let col = self.random_move(&legal);
            result = result.randomized(col);
        }

        log::info!(
            "{} plays column {:?} ({search_type}, depth {}, value {:?}, {} nodes, {}ms)",
            color,
            result.column,
            result.depth,
            result.score,
            result.nodes,
            result.time_ms
        );
        (result, observer)
    }

    /// Uniform choice among `legal`, which must be non-empty.
    fn random_move(&mut self, legal: &[u8]) -> u8 {
        legal[self.rng.random_range(0..legal.len())]
    }

    pub fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = search_type;
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    #[inline]
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NodeKind;

    fn full_board() -> Board {
        let mut board = Board::with_size(2, 2).unwrap();
        for col in [0, 1, 0, 1] {
            board.play(col).unwrap();
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
        assert_eq!(engine.search_type(), SearchType::AlphaBeta);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(SearchType::Minimax, 2, Some(1));
        assert_eq!(engine.max_depth(), 2);
        assert_eq!(engine.search_type(), SearchType::Minimax);
    }

    #[test]
    fn test_engine_from_config() {
        let config = EngineConfig {
            algorithm: "expected_minimax".to_string(),
            depth: 3,
            seed: Some(9),
        };
        let engine = AIEngine::from_config(&config);
        assert_eq!(engine.search_type(), SearchType::ExpectedMinimax);
        assert_eq!(engine.max_depth(), 3);
    }

    #[test]
    fn test_search_type_ids() {
        for search_type in SearchType::SEARCHES {
            assert_eq!(SearchType::from_id(search_type.id()), search_type);
            assert_eq!(search_type.to_string(), search_type.id());
        }
        assert_eq!(SearchType::from_id("random"), SearchType::Random);
        assert_eq!(SearchType::from_id("MINIMAX"), SearchType::Random);
        assert!("alphabeta".parse::<SearchType>().is_err());
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let result = engine.select_move(&mut board, Disc::Yellow, SearchType::AlphaBeta, 1);
        assert_eq!(result.column, Some(3));
        assert_eq!(result.score, Some(7.0));
        assert_eq!(result.nodes, 8);
        assert!(!result.random);
    }

    #[test]
    fn test_full_board_returns_no_move_for_every_strategy() {
        let mut engine = AIEngine::with_config(SearchType::AlphaBeta, 3, Some(0));
        let mut board = full_board();
        for id in ["minimax", "minimax_ab", "expected_minimax", "random", "bogus"] {
            let result = engine.select_move_by_id(&mut board, Disc::Yellow, id, 3);
            assert_eq!(result.column, None, "{id}");
            assert_eq!(result.nodes, 0, "{id}");
            assert_eq!(result.score, None, "{id}");
        }
    }

    #[test]
    fn test_unknown_algorithm_plays_random_legal_column() {
        let mut engine = AIEngine::with_config(SearchType::AlphaBeta, 3, Some(42));
        let mut board = Board::new();
        for _ in 0..6 {
            board.place(0, Disc::Red);
            board.place(6, Disc::Yellow);
        }
        for _ in 0..50 {
            let result = engine.select_move_by_id(&mut board, Disc::Yellow, "mcts", 3);
            assert_eq!(result.search_type, SearchType::Random);
            assert!(result.random);
            assert_eq!(result.nodes, 0);
            let col = result.column.unwrap();
            assert!(board.is_valid_move(col), "illegal column {col}");
        }
    }

    #[test]
    fn test_random_fallback_is_reproducible_with_seed() {
        let mut board = Board::new();
        let picks = |seed| {
            let mut engine = AIEngine::with_config(SearchType::Random, 1, Some(seed));
            (0..20)
                .map(|_| {
                    engine
                        .select_move(&mut board.clone(), Disc::Red, SearchType::Random, 1)
                        .column
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
        assert!(engine_covers_all_columns(&mut board));
    }

    fn engine_covers_all_columns(board: &mut Board) -> bool {
        let mut engine = AIEngine::with_config(SearchType::Random, 1, Some(3));
        let mut seen = [false; 7];
        for _ in 0..500 {
            if let Some(col) = engine.get_move(board, Disc::Yellow) {
                seen[usize::from(col)] = true;
            }
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_single_legal_column_every_strategy() {
        let mut board = Board::with_size(2, 3).unwrap();
        for col in [0, 0, 2, 2] {
            board.play(col).unwrap();
        }
        let mut engine = AIEngine::with_config(SearchType::AlphaBeta, 4, Some(0));
        for search_type in SearchType::SEARCHES {
            let result = engine.select_move(&mut board, Disc::Yellow, search_type, 4);
            assert_eq!(result.column, Some(1), "{search_type}");
        }
    }

    #[test]
    fn test_strategies_are_deterministic() {
        let mut board = Board::from_moves(&[3, 2, 4, 4, 1]).unwrap();
        let mut engine = AIEngine::new();
        for search_type in SearchType::SEARCHES {
            let first = engine.select_move(&mut board, Disc::Red, search_type, 3);
            let second = engine.select_move(&mut board, Disc::Red, search_type, 3);
            assert_eq!(first.column, second.column);
            assert_eq!(first.score, second.score);
            assert_eq!(first.nodes, second.nodes);
        }
    }

    #[test]
    fn test_minimax_and_alpha_beta_agree() {
        let mut board = Board::from_moves(&[3, 3, 2, 4, 4]).unwrap();
        let mut engine = AIEngine::new();
        for depth in 1..=4 {
            let plain = engine.select_move(&mut board, Disc::Red, SearchType::Minimax, depth);
            let pruned = engine.select_move(&mut board, Disc::Red, SearchType::AlphaBeta, depth);
            assert_eq!(plain.column, pruned.column);
            assert_eq!(plain.score, pruned.score);
            assert!(pruned.nodes <= plain.nodes);
        }
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let mut engine = AIEngine::new();
        let mut board = Board::from_moves(&[3, 4, 3]).unwrap();
        for search_type in SearchType::SEARCHES {
            let plain = engine.select_move(&mut board, Disc::Red, search_type, 3);
            let (traced, trace) =
                engine.select_move_traced(&mut board, Disc::Red, search_type, 3);
            assert_eq!(plain.column, traced.column);
            assert_eq!(plain.score, traced.score);
            assert_eq!(plain.nodes, traced.nodes);

            let summary = trace.summary.as_ref().unwrap();
            assert_eq!(summary.algorithm, search_type.id());
            assert_eq!(summary.column, traced.column);
            assert_eq!(summary.value, traced.score);
            assert!(matches!(
                trace.node(trace.root().unwrap()).unwrap().kind,
                NodeKind::Decision { .. }
            ));
        }
    }

    #[test]
    fn test_random_trace_has_summary_only() {
        let mut engine = AIEngine::with_config(SearchType::Random, 1, Some(2));
        let mut board = Board::new();
        let (result, trace) =
            engine.select_move_traced(&mut board, Disc::Yellow, SearchType::Random, 2);
        assert!(trace.is_empty());
        let summary = trace.summary.unwrap();
        assert_eq!(summary.algorithm, "random");
        assert_eq!(summary.column, result.column);
        assert_eq!(summary.value, None);
    }

    #[test]
    fn test_zero_depth_searches_one_ply() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let result = engine.select_move(&mut board, Disc::Yellow, SearchType::Minimax, 0);
        assert_eq!(result.depth, 1);
        assert_eq!(result.column, Some(3));
        assert!(!result.random);
    }

    #[test]
    fn test_board_unchanged_after_selection() {
        let mut engine = AIEngine::new();
        let mut board = Board::from_moves(&[0, 1, 2, 3]).unwrap();
        let before = board.clone();
        for search_type in SearchType::SEARCHES {
            let _ = engine.select_move_traced(&mut board, Disc::Yellow, search_type, 4);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_set_search_type_and_depth() {
        let mut engine = AIEngine::new();
        engine.set_search_type(SearchType::ExpectedMinimax);
        engine.set_max_depth(1);
        let mut board = Board::new();
        assert_eq!(engine.get_move(&mut board, Disc::Yellow), Some(3));
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
    }
}
