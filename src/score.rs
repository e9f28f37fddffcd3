//! Score tally types: outcome keys and the running scoreboard.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::game::Mark;

/// Outcome of a finished round, as a tally key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Outcome {
    /// X won the round.
    X,
    /// O won the round.
    O,
    /// The round ended in a draw.
    Draw,
}

impl Outcome {
    /// Outcome for a round won by the given mark.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }

    /// Converts the outcome to the string stored in the database.
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::O => "o",
            Self::Draw => "draw",
        }
    }

    /// Parses an outcome from the string stored in the database.
    ///
    /// Returns `None` if the string is not a valid outcome value.
    #[instrument]
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "x" => Some(Self::X),
            "o" => Some(Self::O),
            "draw" => Some(Self::Draw),
            _ => None,
        }
    }
}

/// Running score tally for a session.
///
/// Counts are non-negative and only ever incremented while the session
/// runs; the store may replace the whole tally on load. Serializes to
/// the flat `{"X": n, "O": n, "Draw": n}` record the store round-trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    #[serde(rename = "X")]
    x: u32,
    /// Rounds won by O.
    #[serde(rename = "O")]
    o: u32,
    /// Drawn rounds.
    #[serde(rename = "Draw")]
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scoreboard from explicit counts.
    pub fn from_counts(x: u32, o: u32, draws: u32) -> Self {
        Self { x, o, draws }
    }

    /// Returns the tally for the given outcome.
    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::X => self.x,
            Outcome::O => self.o,
            Outcome::Draw => self.draws,
        }
    }

    /// Increments the tally for the given outcome.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::X => self.x += 1,
            Outcome::O => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total rounds recorded.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}   O: {}   Draws: {}", self.x, self.o, self.draws)
    }
}
