//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning lines.
///
/// Declaration order is evaluation order: rows top to bottom, columns left
/// to right, main diagonal, anti-diagonal. When a board holds more than one
/// complete line, the first in this order decides the winner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) - (1,1) - (2,2).
    MainDiagonal,
    /// (0,2) - (1,1) - (2,0).
    AntiDiagonal,
}

impl Line {
    /// The three `(row, col)` cells of this line.
    pub fn coordinates(self) -> [(usize, usize); 3] {
        match self {
            Line::TopRow => [(0, 0), (0, 1), (0, 2)],
            Line::MiddleRow => [(1, 0), (1, 1), (1, 2)],
            Line::BottomRow => [(2, 0), (2, 1), (2, 2)],
            Line::LeftColumn => [(0, 0), (1, 0), (2, 0)],
            Line::CenterColumn => [(0, 1), (1, 1), (2, 1)],
            Line::RightColumn => [(0, 2), (1, 2), (2, 2)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// The three positions of this line.
    pub fn positions(self) -> [Position; 3] {
        self.coordinates()
            .map(|(row, col)| Position::ALL[row * 3 + col])
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions().map(|pos| board.get(pos));
        match a.mark() {
            Some(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

/// Returns the first complete line on the board, in evaluation order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::iter().find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line holding three equal marks,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Line::iter().find_map(|line| line.owner(board))
}
