//! Score persistence layer.
//!
//! The session talks to a [`ScoreStore`] trait object, so the durable
//! SQLite store and the in-memory fake are interchangeable.

mod error;
mod memory;
mod models;
mod schema; // Diesel generated schema - internal use only
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryScoreStore;
pub use models::{NewTally, TallyRow};
pub use sqlite::{MIGRATIONS, SqliteScoreStore};

use crate::score::Scoreboard;

/// Persists and reloads the running score tally.
///
/// `load` runs once at session start; `save` runs after every score
/// change. Failures are non-fatal: the session logs and keeps playing.
pub trait ScoreStore {
    /// Loads the persisted tally, zeroed if nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Scoreboard, StoreError>;

    /// Writes the current tally.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&self, scores: &Scoreboard) -> Result<(), StoreError>;
}
