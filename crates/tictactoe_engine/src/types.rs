//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a validated position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if either coordinate is outside 0..=2.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Position::new(row, col).map(|pos| self.get(pos))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// The board is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidCoordinate`] if either coordinate is outside 0..=2.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        let pos = Position::new(row, col)?;
        self.place(pos, mark)
    }

    /// Places `mark` at a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.row()][pos.col()];
        if !cell.is_empty() {
            return Err(GameError::CellOccupied {
                row: pos.row(),
                col: pos.col(),
            });
        }
        *cell = Cell::Occupied(mark);
        debug!(%pos, %mark, "Cell set");
        Ok(())
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }

    /// Returns the grid, row by row.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.mark() == Some(mark))
            .count()
    }

    /// Formats the board with empty cells shown as their index (0-8).
    pub fn display_with_positions(&self) -> String {
        self.render(|pos| pos.index().to_string())
    }

    fn render(&self, empty: impl Fn(Position) -> String) -> String {
        let mut out = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Cell::Empty => empty(pos),
                Cell::Occupied(mark) => mark.to_string(),
            };
            out.push_str(&symbol);
            if pos.col() < 2 {
                out.push('|');
            } else if pos.row() < 2 {
                out.push_str("\n-----\n");
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(|_| " ".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|&p| board.is_empty(p)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get_cell() {
        let mut board = Board::new();
        board.set_cell(1, 2, Mark::O).unwrap();
        assert_eq!(board.cell(1, 2), Ok(Cell::Occupied(Mark::O)));
        assert_eq!(board.cell(2, 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_set_occupied_cell_fails_without_mutation() {
        let mut board = Board::new();
        board.set_cell(0, 0, Mark::X).unwrap();
        let before = board.clone();

        let result = board.set_cell(0, 0, Mark::O);
        assert_eq!(result, Err(GameError::CellOccupied { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut board = Board::new();
        assert_eq!(
            board.set_cell(3, 0, Mark::X),
            Err(GameError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(
            board.cell(0, 7),
            Err(GameError::InvalidCoordinate { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::X).unwrap();
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set_cell(0, 0, Mark::X).unwrap();
        board.set_cell(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X| | \n-----\n |O| \n-----\n | | ");
        assert_eq!(
            board.display_with_positions(),
            "X|1|2\n-----\n3|O|5\n-----\n6|7|8"
        );
    }

    #[test]
    fn test_mark_parse_and_display() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("Z".parse::<Mark>().is_err());
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
