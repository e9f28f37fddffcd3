//! Tic Tac Toe Scoreboard - terminal two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Game**: pure state machine (board, turn alternation, win/draw
//!   detection over the eight lines)
//! - **Session**: owns the game, the score tally, and the player names;
//!   syncs scores to an injected store after every finished round
//! - **Store**: score persistence behind the [`ScoreStore`] trait
//!   (SQLite for durability, in-memory for tests and `--ephemeral`)
//! - **TUI**: ratatui display/input layer
//!
//! # Example
//!
//! ```
//! use tictactoe_scoreboard::{GameSession, MemoryScoreStore, MoveOutcome};
//!
//! let mut session = GameSession::new(Box::new(MemoryScoreStore::new()));
//! let outcome = session.play(4).expect("center is open");
//! assert!(matches!(outcome, MoveOutcome::Continue { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod score;
mod session;
mod store;

// Public module declarations
pub mod tui;

// Crate-level exports - game state machine
pub use game::{Board, Cell, Game, GameState, GameStatus, Mark, MoveOutcome, MoveRejected, Square, rules};

// Crate-level exports - scores
pub use score::{Outcome, Scoreboard};

// Crate-level exports - session
pub use session::{GameSession, PlayerNames};

// Crate-level exports - persistence
pub use store::{MIGRATIONS, MemoryScoreStore, ScoreStore, SqliteScoreStore, StoreError};
