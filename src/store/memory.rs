//! In-memory score store for tests and ephemeral sessions.

use std::sync::Mutex;

use tracing::instrument;

use crate::score::Scoreboard;
use crate::store::{ScoreStore, StoreError};

/// Score store that holds the tally in memory.
///
/// Substitutes for [`SqliteScoreStore`](crate::SqliteScoreStore) in
/// tests and when running with `--ephemeral`. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    scores: Mutex<Scoreboard>,
}

impl MemoryScoreStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a tally.
    pub fn with_scores(scores: Scoreboard) -> Self {
        Self {
            scores: Mutex::new(scores),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Scoreboard, StoreError> {
        self.scores
            .lock()
            .map(|guard| *guard)
            .map_err(|_| StoreError::new("Score mutex poisoned"))
    }

    #[instrument(skip(self, scores))]
    fn save(&self, scores: &Scoreboard) -> Result<(), StoreError> {
        let mut guard = self
            .scores
            .lock()
            .map_err(|_| StoreError::new("Score mutex poisoned"))?;
        *guard = *scores;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Outcome;

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryScoreStore::new();
        let mut scores = Scoreboard::new();
        scores.record(Outcome::O);
        scores.record(Outcome::Draw);

        store.save(&scores).expect("save");
        assert_eq!(store.load().expect("load"), scores);
    }

    #[test]
    fn test_load_empty_is_zeroed() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.load().expect("load"), Scoreboard::new());
    }
}
