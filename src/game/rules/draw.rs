//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is a draw: full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Mark};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Cell::Center, Square::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for cell in Cell::ALL {
            board.set(cell, Square::Occupied(Mark::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full, no line
        board.set(Cell::TopLeft, Square::Occupied(Mark::X));
        board.set(Cell::TopCenter, Square::Occupied(Mark::O));
        board.set(Cell::TopRight, Square::Occupied(Mark::X));
        board.set(Cell::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Cell::Center, Square::Occupied(Mark::X));
        board.set(Cell::MiddleRight, Square::Occupied(Mark::X));
        board.set(Cell::BottomLeft, Square::Occupied(Mark::O));
        board.set(Cell::BottomCenter, Square::Occupied(Mark::X));
        board.set(Cell::BottomRight, Square::Occupied(Mark::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        board.set(Cell::TopLeft, Square::Occupied(Mark::X));
        board.set(Cell::TopCenter, Square::Occupied(Mark::X));
        board.set(Cell::TopRight, Square::Occupied(Mark::X));
        board.set(Cell::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Cell::Center, Square::Occupied(Mark::O));

        assert!(!is_draw(&board));
    }
}
