//! Durable score store backed by SQLite.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::score::{Outcome, Scoreboard};
use crate::store::{NewTally, ScoreStore, StoreError, TallyRow, schema};

/// Embedded schema migrations, applied on connect.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Score store backed by a SQLite database file.
///
/// Opens a fresh connection per operation, so the path must refer to a
/// durable database file (`:memory:` would vanish between calls; use
/// [`MemoryScoreStore`](crate::MemoryScoreStore) for that).
#[derive(Debug, Clone)]
pub struct SqliteScoreStore {
    db_path: String,
}

impl SqliteScoreStore {
    /// Creates a new store for the database at the given path.
    ///
    /// The file and schema are created on first use.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating SqliteScoreStore");
        Self { db_path }
    }

    /// Establishes a connection and applies pending migrations.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        Ok(conn)
    }
}

impl ScoreStore for SqliteScoreStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Scoreboard, StoreError> {
        debug!("Loading score tally");
        let mut conn = self.connection()?;

        let rows = schema::tallies::table
            .select(TallyRow::as_select())
            .load::<TallyRow>(&mut conn)?;

        let mut counts = [0u32; 3];
        for row in &rows {
            match row.parse_outcome() {
                Some(Outcome::X) => counts[0] = *row.count() as u32,
                Some(Outcome::O) => counts[1] = *row.count() as u32,
                Some(Outcome::Draw) => counts[2] = *row.count() as u32,
                None => warn!(outcome = %row.outcome(), "Unknown outcome row, skipping"),
            }
        }
        let scores = Scoreboard::from_counts(counts[0], counts[1], counts[2]);

        info!(%scores, "Score tally loaded");
        Ok(scores)
    }

    #[instrument(skip(self, scores), fields(scores = %scores))]
    fn save(&self, scores: &Scoreboard) -> Result<(), StoreError> {
        debug!("Saving score tally");
        let mut conn = self.connection()?;

        let rows: Vec<NewTally> = Outcome::iter()
            .map(|outcome| NewTally::now(outcome, scores.get(outcome)))
            .collect();

        diesel::replace_into(schema::tallies::table)
            .values(&rows)
            .execute(&mut conn)?;

        info!("Score tally saved");
        Ok(())
    }
}
