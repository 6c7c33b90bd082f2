//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set_cell(1, 1, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // O X O / X O X / X O X
        let marks = [
            Mark::O, Mark::X, Mark::O,
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::X,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark).unwrap();
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::X).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
