//! Pure tic-tac-toe game logic: board, rules, and turn controller.

mod cell;
mod engine;
pub mod rules;
mod types;

pub use cell::Cell;
pub use engine::{Game, MoveOutcome, MoveRejected};
pub use types::{Board, GameState, GameStatus, Mark, Square};
