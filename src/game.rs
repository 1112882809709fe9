//! Real game between a human and the engine
//!
//! Owns the board for the whole session. Real moves go through
//! [`Board::play`], so turns alternate and the game ends when the board is
//! full; the engine's search borrows the same board exclusively while it runs.

use crate::board::{Board, Disc, Pos};
use crate::config::AppConfig;
use crate::engine::{AIEngine, MoveResult, SearchType};
use crate::error::{ConfigError, GameError};
use crate::rules::{outcome, Outcome, Scoreboard};
use crate::search::Trace;

/// A human-versus-engine session.
pub struct Game {
    board: Board,
    human: Disc,
    engine: AIEngine,
    history: Vec<u8>,
    record_traces: bool,
    last_trace: Option<Trace>,
    last_response_ms: Option<u64>,
}

impl Game {
    /// New session on `board` with the engine playing the other disc.
    ///
    /// `human` must be yellow or red.
    pub fn new(board: Board, human: Disc, engine: AIEngine) -> Result<Self, GameError> {
        if human == Disc::Empty {
            return Err(GameError::InvalidHuman { disc: human });
        }
        Ok(Self {
            board,
            human,
            engine,
            history: Vec::new(),
            record_traces: false,
            last_trace: None,
            last_response_ms: None,
        })
    }

    /// Session built from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.new_board()?;
        let engine = AIEngine::from_config(&config.engine);
        Ok(Self::new(board, config.game.human, engine)?)
    }

    /// Keep the search tree of every computer move.
    pub fn set_record_traces(&mut self, record: bool) {
        self.record_traces = record;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn human(&self) -> Disc {
        self.human
    }

    #[inline]
    pub fn computer(&self) -> Disc {
        self.human.opponent()
    }

    #[inline]
    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut AIEngine {
        &mut self.engine
    }

    pub fn search_type(&self) -> SearchType {
        self.engine.search_type()
    }

    pub fn depth(&self) -> u8 {
        self.engine.max_depth()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.board.current_player() == self.human
    }

    /// Columns played so far, in order
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    /// Tree of the last computer move, if traces are recorded
    pub fn last_trace(&self) -> Option<&Trace> {
        self.last_trace.as_ref()
    }

    /// Time the engine took for its last move
    pub fn last_response_ms(&self) -> Option<u64> {
        self.last_response_ms
    }

    pub fn scores(&self) -> Scoreboard {
        Scoreboard::of(&self.board)
    }

    /// Final result, `None` while the game is running
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Play a human move.
    pub fn play_human(&mut self, col: u8) -> Result<Pos, GameError> {
        self.expect_turn(self.human)?;
        let pos = self
            .board
            .play(col)
            .ok_or_else(|| GameError::IllegalMove {
                col,
                legal: self.board.valid_moves(),
            })?;
        self.history.push(col);
        log::debug!("{} played column {col}", self.human);
        Ok(pos)
    }

    /// Let the engine pick and play its move.
    pub fn play_computer(&mut self) -> Result<MoveResult, GameError> {
        let computer = self.computer();
        self.expect_turn(computer)?;

        let (search_type, depth) = (self.engine.search_type(), self.engine.max_depth());
        let result = if self.record_traces {
            let (result, trace) =
                self.engine
                    .select_move_traced(&mut self.board, computer, search_type, depth);
            self.last_trace = Some(trace);
            result
        } else {
            self.engine
                .select_move(&mut self.board, computer, search_type, depth)
        };
        self.last_response_ms = Some(result.time_ms);

        let col = result.column.ok_or(GameError::GameOver)?;
        self.board.play(col).ok_or_else(|| GameError::IllegalMove {
            col,
            legal: self.board.valid_moves(),
        })?;
        self.history.push(col);
        Ok(result)
    }

    /// Start over on an empty board of the same size.
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.last_trace = None;
        self.last_response_ms = None;
    }

    fn expect_turn(&self, disc: Disc) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let expected = self.board.current_player();
        if expected != disc {
            return Err(GameError::NotYourTurn { expected });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game(human: Disc) -> Game {
        let board = Board::with_size(2, 2).unwrap();
        let engine = AIEngine::with_config(SearchType::AlphaBeta, 3, Some(0));
        Game::new(board, human, engine).unwrap()
    }

    #[test]
    fn test_from_default_config() {
        let game = Game::from_config(&AppConfig::default()).unwrap();
        assert_eq!(game.human(), Disc::Yellow);
        assert_eq!(game.computer(), Disc::Red);
        assert_eq!(game.search_type(), SearchType::AlphaBeta);
        assert_eq!(game.depth(), 5);
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_from_invalid_config() {
        let mut config = AppConfig::default();
        config.engine.depth = 0;
        assert!(Game::from_config(&config).is_err());
    }

    #[test]
    fn test_turns_are_enforced() {
        let mut game = small_game(Disc::Yellow);
        assert_eq!(
            game.play_computer().unwrap_err(),
            GameError::NotYourTurn {
                expected: Disc::Yellow
            }
        );
        game.play_human(0).unwrap();
        assert_eq!(
            game.play_human(1).unwrap_err(),
            GameError::NotYourTurn { expected: Disc::Red }
        );
        assert!(!game.is_human_turn());
    }

    #[test]
    fn test_illegal_human_move() {
        let mut game = small_game(Disc::Yellow);
        let err = game.play_human(5).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                col: 5,
                legal: vec![0, 1]
            }
        );
        assert!(game.is_human_turn());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_full_game_to_outcome() {
        let mut game = small_game(Disc::Yellow);
        game.set_record_traces(true);
        while !game.is_over() {
            if game.is_human_turn() {
                let col = game.board().valid_moves()[0];
                game.play_human(col).unwrap();
            } else {
                let result = game.play_computer().unwrap();
                assert!(result.column.is_some());
                assert!(game.last_trace().is_some());
                assert!(game.last_response_ms().is_some());
            }
        }
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.scores(), Scoreboard::default());
        assert_eq!(game.play_human(0).unwrap_err(), GameError::GameOver);
        assert_eq!(game.play_computer().unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_computer_moves_first_when_human_is_red() {
        let mut game = small_game(Disc::Red);
        assert!(!game.is_human_turn());
        let result = game.play_computer().unwrap();
        let col = result.column.unwrap();
        assert_eq!(game.board().get(Pos::new(0, col)), Disc::Yellow);
        assert!(game.is_human_turn());
        // Traces are off by default
        assert!(game.last_trace().is_none());
    }

    #[test]
    fn test_restart() {
        let mut game = small_game(Disc::Yellow);
        game.play_human(1).unwrap();
        game.play_computer().unwrap();
        game.restart();
        assert_eq!(game.board(), &Board::with_size(2, 2).unwrap());
        assert!(game.history().is_empty());
        assert!(game.last_response_ms().is_none());
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_empty_human_is_rejected() {
        let board = Board::with_size(2, 2).unwrap();
        let engine = AIEngine::with_config(SearchType::AlphaBeta, 3, Some(0));
        assert_eq!(
            Game::new(board, Disc::Empty, engine).err(),
            Some(GameError::InvalidHuman { disc: Disc::Empty })
        );

        let mut config = AppConfig::default();
        config.game.human = Disc::Empty;
        assert!(Game::from_config(&config).is_err());
    }
}
