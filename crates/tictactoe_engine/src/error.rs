//! Error types for board and session operations.

use derive_more::{Display, Error};

/// Error returned when a move or board access is rejected.
///
/// None of these are fatal: the board and session are left exactly as they
/// were before the failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Row or column outside 0..=2.
    #[display("Coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// A move was submitted after the round ended.
    #[display("Game is already over")]
    GameAlreadyOver,
}
