//! Validated board coordinates.

use crate::error::GameError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address with `row` and `col` both in 0..=2.
///
/// The only way to build one is through [`Position::new`] or
/// [`Position::from_index`], so indexing the board with a `Position`
/// never goes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position from `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if either value exceeds 2.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Human-readable label, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Parses user input into a position.
    ///
    /// Accepts `"row col"`, `"row,col"`, a single index `0-8`, or a label
    /// (case-insensitive). Coordinates that parse as numbers but fall off
    /// the board are reported as [`GameError::InvalidCoordinate`] so hosts
    /// can log them; anything unrecognised yields `Ok(None)`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Option<Self>, GameError> {
        let input = input.trim();

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if let [row, col] = parts.as_slice() {
            return match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => Self::new(row, col).map(Some),
                _ => Ok(None),
            };
        }

        if let Ok(index) = input.parse::<usize>() {
            return Ok(Self::from_index(index));
        }

        let lower = input.to_lowercase();
        Ok(Self::ALL
            .into_iter()
            .find(|pos| pos.label().to_lowercase() == lower))
    }

    /// Returns the positions that are still empty on `board`.
    #[instrument(skip(board))]
    pub fn empty_positions(board: &Board) -> Vec<Position> {
        Self::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
