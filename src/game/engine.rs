//! Turn controller: validated moves and round lifecycle.

use tracing::{debug, instrument};

use super::cell::Cell;
use super::rules;
use super::types::{GameState, GameStatus, Mark};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; it is now `next`'s turn.
    Continue {
        /// The mark to move next.
        next: Mark,
    },
    /// The move completed a line; the mark wins the round.
    Won(Mark),
    /// The move filled the board with no winner.
    Draw,
}

/// Reasons a move attempt is rejected.
///
/// Rejection is recoverable and leaves the game state untouched; callers
/// may ignore it (the UI simply doesn't update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index does not name a cell on the board.
    #[display("Index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
    /// The cell is already occupied.
    #[display("{_0} is already occupied")]
    CellOccupied(Cell),
    /// The round already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}

/// Tic-tac-toe game engine.
///
/// Wraps [`GameState`] with move validation and terminal-state
/// detection. One engine drives one round at a time; [`Game::reset`]
/// starts the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &super::types::Board {
        self.state.board()
    }

    /// Returns the mark whose turn it is.
    pub fn active_mark(&self) -> Mark {
        self.state.active_mark()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Attempts to place the active mark at the given board index.
    ///
    /// On acceptance the mark is written, win/draw detection runs, and
    /// the outcome is reported. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] when the round is already over, the
    /// index is out of range, or the cell is occupied.
    #[instrument(skip(self), fields(active = %self.state.active_mark()))]
    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveRejected> {
        if self.state.status().is_terminal() {
            return Err(MoveRejected::GameOver);
        }

        let cell = Cell::from_index(index).ok_or(MoveRejected::OutOfBounds(index))?;

        if !self.state.board().is_empty(cell) {
            return Err(MoveRejected::CellOccupied(cell));
        }

        let mover = self.state.active_mark();
        self.state.apply_move(cell);
        debug!(%mover, cell = %cell.label(), "Mark placed");

        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
            return Ok(MoveOutcome::Won(winner));
        }

        if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            return Ok(MoveOutcome::Draw);
        }

        Ok(MoveOutcome::Continue {
            next: self.state.active_mark(),
        })
    }

    /// Resets the round: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternates_on_accepted_moves() {
        let mut game = Game::new();
        assert_eq!(game.active_mark(), Mark::X);
        game.make_move(0).expect("valid move");
        assert_eq!(game.active_mark(), Mark::O);
        game.make_move(4).expect("valid move");
        assert_eq!(game.active_mark(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut game = Game::new();
        game.make_move(4).expect("valid move");
        let before = game.state().clone();

        let err = game.make_move(4).expect_err("occupied cell must reject");
        assert_eq!(err, MoveRejected::CellOccupied(Cell::Center));
        assert_eq!(game.state(), &before);
        // Active mark unchanged by the rejection.
        assert_eq!(game.active_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        let before = game.state().clone();
        let err = game.make_move(9).expect_err("index 9 must reject");
        assert_eq!(err, MoveRejected::OutOfBounds(9));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_win_top_row() {
        let mut game = Game::new();
        // X:0, O:3, X:1, O:4, X:2 - X takes the top row.
        game.make_move(0).expect("valid");
        game.make_move(3).expect("valid");
        game.make_move(1).expect("valid");
        game.make_move(4).expect("valid");
        let outcome = game.make_move(2).expect("valid");

        assert_eq!(outcome, MoveOutcome::Won(Mark::X));
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_draw_fills_board() {
        let mut game = Game::new();
        // X:0, O:4, X:8, O:1, X:7, O:6, X:2, O:5, X:3 - no line completed.
        for index in [0, 4, 8, 1, 7, 6, 2, 5] {
            let outcome = game.make_move(index).expect("valid");
            assert!(matches!(outcome, MoveOutcome::Continue { .. }));
        }
        let outcome = game.make_move(3).expect("valid");

        assert_eq!(outcome, MoveOutcome::Draw);
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.make_move(index).expect("valid");
        }
        game.make_move(2).expect("winning move");

        let err = game.make_move(5).expect_err("terminal game must reject");
        assert_eq!(err, MoveRejected::GameOver);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut game = Game::new();
        game.make_move(0).expect("valid");
        game.reset();
        assert_eq!(game.state(), &GameState::new());
    }
}
