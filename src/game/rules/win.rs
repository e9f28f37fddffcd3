//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the eight winning lines (rows, then columns, then diagonals)
/// and returns `Some(mark)` for the first line fully occupied by one
/// mark. A valid board has at most one winner, so the scan order only
/// determines which line gets credit, never which mark.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
        // Columns
        [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
        [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
        [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
        // Diagonals
        [Cell::TopLeft, Cell::Center, Cell::BottomRight],
        [Cell::TopRight, Cell::Center, Cell::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Mark::X));
        board.set(Cell::TopCenter, Square::Occupied(Mark::X));
        board.set(Cell::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        board.set(Cell::TopCenter, Square::Occupied(Mark::O));
        board.set(Cell::Center, Square::Occupied(Mark::O));
        board.set(Cell::BottomCenter, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Mark::O));
        board.set(Cell::Center, Square::Occupied(Mark::O));
        board.set(Cell::BottomRight, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Cell::TopRight, Square::Occupied(Mark::X));
        board.set(Cell::Center, Square::Occupied(Mark::X));
        board.set(Cell::BottomLeft, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Mark::X));
        board.set(Cell::TopCenter, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, Square::Occupied(Mark::X));
        board.set(Cell::TopCenter, Square::Occupied(Mark::O));
        board.set(Cell::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }
}
