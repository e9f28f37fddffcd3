//! Game session: one board, two named players, a running tally.

use tracing::{debug, info, instrument, warn};

use crate::game::{Game, GameState, Mark, MoveOutcome, MoveRejected};
use crate::score::{Outcome, Scoreboard};
use crate::store::ScoreStore;

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    /// Name shown for the X player.
    pub x: String,
    /// Name shown for the O player.
    pub o: String,
}

impl PlayerNames {
    /// Creates names from two strings; blank input falls back to the
    /// default for that mark.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        let x = x.into();
        let o = o.into();
        Self {
            x: if x.trim().is_empty() {
                "Player X".to_string()
            } else {
                x.trim().to_string()
            },
            o: if o.trim().is_empty() {
                "Player O".to_string()
            } else {
                o.trim().to_string()
            },
        }
    }

    /// Name of the player using the given mark.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A playing session: game engine, scoreboard, player names, and the
/// injected score store.
///
/// The session is the single owner of mutable game state. Input events
/// flow through [`GameSession::play`]; score changes sync to the store
/// fire-and-forget, with failures logged and dropped.
pub struct GameSession {
    game: Game,
    scores: Scoreboard,
    names: PlayerNames,
    store: Box<dyn ScoreStore>,
}

impl GameSession {
    /// Creates a session, loading the persisted tally from the store.
    ///
    /// A load failure degrades to a zeroed scoreboard; scores are
    /// non-critical state.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let scores = match store.load() {
            Ok(scores) => {
                info!(%scores, "Loaded persisted scores");
                scores
            }
            Err(e) => {
                warn!(error = %e, "Failed to load scores, starting from zero");
                Scoreboard::new()
            }
        };

        Self {
            game: Game::new(),
            scores,
            names: PlayerNames::default(),
            store,
        }
    }

    /// Returns the current round's state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Returns the mark whose turn it is.
    pub fn active_mark(&self) -> Mark {
        self.game.active_mark()
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Replaces the player names, leaving board and scores untouched.
    #[instrument(skip(self))]
    pub fn set_names(&mut self, names: PlayerNames) {
        info!(x = %names.x, o = %names.o, "Player names updated");
        self.names = names;
    }

    /// Applies a move at the given board index.
    ///
    /// A round-ending move updates the tally, syncs the store, and
    /// resets the board for the next round (scores and names persist).
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] for out-of-range, occupied, or
    /// already-terminal moves; the session is unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, MoveRejected> {
        let outcome = self.game.make_move(index)?;

        match outcome {
            MoveOutcome::Won(mark) => {
                info!(winner = %mark, "Round won");
                self.finish_round(Outcome::win_for(mark));
            }
            MoveOutcome::Draw => {
                info!("Round drawn");
                self.finish_round(Outcome::Draw);
            }
            MoveOutcome::Continue { next } => {
                debug!(next = %next, "Turn passes");
            }
        }

        Ok(outcome)
    }

    /// Manually restarts the round, preserving scores and names.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Manual restart");
        self.game.reset();
    }

    /// Records the outcome, syncs the store, and resets the board.
    fn finish_round(&mut self, outcome: Outcome) {
        self.scores.record(outcome);
        self.sync_scores();
        self.game.reset();
    }

    /// Fire-and-forget persistence of the current tally.
    fn sync_scores(&self) {
        if let Err(e) = self.store.save(&self.scores) {
            warn!(error = %e, "Failed to persist scores");
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("scores", &self.scores)
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryScoreStore;

    fn session() -> GameSession {
        GameSession::new(Box::new(MemoryScoreStore::new()))
    }

    #[test]
    fn test_win_records_and_resets_board() {
        let mut s = session();
        for index in [0, 3, 1, 4] {
            s.play(index).expect("valid move");
        }
        let outcome = s.play(2).expect("winning move");

        assert_eq!(outcome, MoveOutcome::Won(Mark::X));
        assert_eq!(s.scores().get(Outcome::X), 1);
        // Board reset for the next round, X to move again.
        assert_eq!(s.state(), &GameState::new());
    }

    #[test]
    fn test_draw_records_and_resets_board() {
        let mut s = session();
        for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            s.play(index).expect("valid move");
        }
        assert_eq!(s.scores().get(Outcome::Draw), 1);
        assert_eq!(s.state(), &GameState::new());
    }

    #[test]
    fn test_session_reloads_persisted_scores() {
        let mut seed = Scoreboard::new();
        seed.record(Outcome::O);
        let store = Box::new(MemoryScoreStore::with_scores(seed));
        let s = GameSession::new(store);
        assert_eq!(s.scores().get(Outcome::O), 1);
    }

    #[test]
    fn test_restart_preserves_scores_and_names() {
        let mut s = session();
        s.set_names(PlayerNames::new("Ada", "Grace"));
        for index in [0, 3, 1, 4, 2] {
            s.play(index).expect("valid move");
        }
        s.play(4).expect("valid move");
        s.restart();

        assert_eq!(s.scores().get(Outcome::X), 1);
        assert_eq!(s.names().name_of(Mark::X), "Ada");
        assert_eq!(s.state(), &GameState::new());
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut s = session();
        s.play(0).expect("valid move");
        let scores_before = *s.scores();
        let state_before = s.state().clone();

        assert!(s.play(0).is_err());
        assert!(s.play(42).is_err());
        assert_eq!(s.scores(), &scores_before);
        assert_eq!(s.state(), &state_before);
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let names = PlayerNames::new("  ", "Grace");
        assert_eq!(names.name_of(Mark::X), "Player X");
        assert_eq!(names.name_of(Mark::O), "Grace");
    }
}
