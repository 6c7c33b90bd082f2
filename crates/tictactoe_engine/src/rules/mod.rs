//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here holds state, so every
//! call recomputes the verdict from the cells.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, winning_line};

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    Undecided,
    /// A line of three holds this mark.
    Win(Mark),
    /// Board full with no line complete.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board: first complete line in [`Line`] order, else draw
/// if full, else undecided.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    debug!("Evaluating board\n{}", board);

    let outcome = match check_winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Undecided,
    };

    debug!(%outcome, "Board evaluated");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins() {
        use strum::IntoEnumIterator;

        for mark in [Mark::X, Mark::O] {
            for line in Line::iter() {
                let mut board = Board::new();
                for pos in line.positions() {
                    board.place(pos, mark).unwrap();
                }
                assert_eq!(evaluate(&board), Outcome::Win(mark), "{line}");
            }
        }
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Undecided.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Win(Mark::X).to_string(), "Player X wins");
    }

    #[test]
    fn test_partial_board_undecided() {
        let mut board = Board::new();
        board.place(Position::new(0, 0).unwrap(), Mark::X).unwrap();
        board.place(Position::new(1, 1).unwrap(), Mark::O).unwrap();
        assert_eq!(evaluate(&board), Outcome::Undecided);
    }
}
