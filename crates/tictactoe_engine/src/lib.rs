//! Tic-tac-toe engine.
//!
//! Pure game logic for two-player tic-tac-toe on a 3x3 board, with no
//! rendering and no I/O.
//!
//! # Architecture
//!
//! - **Board**: the grid of [`Cell`]s addressed by `(row, col)`
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Turn**: whose [`Mark`] moves next, with change notification
//! - **Session**: one round composing the above, with game-end notification
//! - **Ledger**: score keeping across rounds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Mark, Outcome, ScoreLedger};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let ledger = Rc::new(RefCell::new(ScoreLedger::new()));
//! let sink = Rc::clone(&ledger);
//!
//! let mut session = GameSession::new(Mark::O);
//! session.on_game_end(move |end| sink.borrow_mut().record(end));
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     assert_eq!(session.submit_move(row, col), Ok(Outcome::Undecided));
//! }
//! assert_eq!(session.submit_move(0, 2), Ok(Outcome::Win(Mark::O)));
//! assert_eq!(ledger.borrow().wins(Mark::O), 1);
//!
//! session.reset();
//! assert_eq!(session.current_turn(), Mark::O);
//! ```

#![warn(missing_docs)]

mod error;
mod ledger;
mod position;
mod session;
mod turn;
mod types;

pub mod invariants;
pub mod rules;

pub use error::GameError;
pub use ledger::ScoreLedger;
pub use position::Position;
pub use rules::{Line, Outcome, evaluate};
pub use session::{GameEnd, GameEndListener, GameSession, SessionState};
pub use turn::{TurnListener, TurnTracker};
pub use types::{Board, Cell, Mark};
