//! A single round of tic-tac-toe.
//!
//! [`GameSession`] owns the board and the turn tracker, validates moves,
//! runs the evaluator after each accepted move and reports the end of the
//! round exactly once.

use crate::error::GameError;
use crate::rules::{self, Outcome};
use crate::turn::TurnTracker;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Round is ongoing and accepts moves.
    InProgress,
    /// Round ended with a winner.
    Won(Mark),
    /// Round ended in a draw.
    Draw,
}

impl SessionState {
    /// Returns true once the round has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, SessionState::InProgress)
    }
}

/// Payload of the game-end notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEnd {
    /// The round was won by this mark.
    Winner(Mark),
    /// The round ended with a full board and no line.
    NoWinner,
}

impl GameEnd {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameEnd::Winner(mark) => Some(mark),
            GameEnd::NoWinner => None,
        }
    }
}

impl std::fmt::Display for GameEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEnd::Winner(mark) => write!(f, "{}", mark),
            GameEnd::NoWinner => write!(f, "NONE"),
        }
    }
}

/// Callback invoked once per round with the terminal result.
pub type GameEndListener = Box<dyn FnMut(GameEnd)>;

/// One round: board, turn and outcome.
pub struct GameSession {
    board: Board,
    turn: TurnTracker,
    state: SessionState,
    on_game_end: Option<GameEndListener>,
}

impl GameSession {
    /// Creates a session whose rounds start with `starting_mark`.
    #[instrument]
    pub fn new(starting_mark: Mark) -> Self {
        info!(%starting_mark, "Creating game session");
        Self {
            board: Board::new(),
            turn: TurnTracker::new(starting_mark),
            state: SessionState::InProgress,
            on_game_end: None,
        }
    }

    /// Registers the turn-change listener, replacing any previous one.
    ///
    /// Called with the newly active mark after every accepted move and on
    /// every reset.
    pub fn on_turn_change(&mut self, listener: impl FnMut(Mark) + 'static) {
        self.turn.set_observer(listener);
    }

    /// Registers the game-end listener, replacing any previous one.
    pub fn on_game_end(&mut self, listener: impl FnMut(GameEnd) + 'static) {
        self.on_game_end = Some(Box::new(listener));
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_turn(&self) -> Mark {
        self.turn.current()
    }

    /// Returns the mark each round starts with.
    pub fn starting_mark(&self) -> Mark {
        self.turn.starting_mark()
    }

    /// Returns the round state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// On success the turn passes to the other mark, the board is evaluated
    /// and the resulting outcome is returned. A terminal outcome ends the
    /// round and fires the game-end listener.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] if the round has ended.
    /// - [`GameError::InvalidCoordinate`] if `row` or `col` is off the board.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(mark = %self.turn.current()))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if self.state.is_over() {
            warn!(state = ?self.state, "Move rejected: game over");
            return Err(GameError::GameAlreadyOver);
        }

        let mark = self.turn.current();
        self.board.set_cell(row, col, mark).map_err(|e| {
            warn!(error = %e, "Move rejected");
            e
        })?;

        self.turn.toggle();

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        let outcome = rules::evaluate(&self.board);
        match outcome {
            Outcome::Win(winner) => self.finish(SessionState::Won(winner), GameEnd::Winner(winner)),
            Outcome::Draw => self.finish(SessionState::Draw, GameEnd::NoWinner),
            Outcome::Undecided => debug!("Round continues"),
        }

        Ok(outcome)
    }

    /// Clears the board, returns the turn to the starting mark and reopens
    /// the round. Valid from any state.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn.reset();
        self.state = SessionState::InProgress;
        info!(starting_mark = %self.turn.starting_mark(), "Round reset");
    }

    fn finish(&mut self, state: SessionState, end: GameEnd) {
        self.state = state;
        info!(result = %end, "Round over");
        if let Some(listener) = self.on_game_end.as_mut() {
            listener(end);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("state", &self.state)
            .field("on_game_end", &self.on_game_end.is_some())
            .finish()
    }
}
