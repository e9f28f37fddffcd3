//! Database row types for the score tally.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::score::Outcome;
use crate::store::schema;

/// One persisted tally row: an outcome key and its running count.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::tallies)]
pub struct TallyRow {
    outcome: String,
    count: i32,
    updated_at: NaiveDateTime,
}

impl TallyRow {
    /// Parses the stored outcome string into an [`Outcome`] key.
    ///
    /// Returns `None` for unknown strings; callers skip such rows with
    /// a warning rather than failing the whole load.
    pub fn parse_outcome(&self) -> Option<Outcome> {
        Outcome::from_db_string(self.outcome())
    }
}

/// Insertable tally row for writing the current counts.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::tallies)]
pub struct NewTally {
    outcome: String,
    count: i32,
    updated_at: NaiveDateTime,
}

impl NewTally {
    /// Builds a row for the given outcome and count, stamped now.
    pub fn now(outcome: Outcome, count: u32) -> Self {
        Self::new(
            outcome.to_db_string().to_string(),
            count as i32,
            chrono::Utc::now().naive_utc(),
        )
    }
}
