//! Tests for score persistence and the session-to-store flow.

use tempfile::NamedTempFile;

use tictactoe_scoreboard::{
    GameSession, Outcome, Scoreboard, ScoreStore, SqliteScoreStore,
};

/// Creates a temporary database file and a store pointed at it. The
/// file handle must stay in scope to keep the file alive.
fn setup_test_store() -> (NamedTempFile, SqliteScoreStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = SqliteScoreStore::new(db_path);
    (db_file, store)
}

#[test]
fn test_load_empty_database_is_zeroed() {
    let (_db, store) = setup_test_store();
    let scores = store.load().expect("Load failed");
    assert_eq!(scores, Scoreboard::new());
}

#[test]
fn test_save_load_round_trip() {
    let (_db, store) = setup_test_store();

    let mut scores = Scoreboard::new();
    scores.record(Outcome::X);
    scores.record(Outcome::X);
    scores.record(Outcome::O);
    scores.record(Outcome::Draw);

    store.save(&scores).expect("Save failed");
    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded, scores);
}

#[test]
fn test_save_overwrites_previous_tally() {
    let (_db, store) = setup_test_store();

    let mut scores = Scoreboard::new();
    scores.record(Outcome::O);
    store.save(&scores).expect("Save failed");

    scores.record(Outcome::O);
    scores.record(Outcome::Draw);
    store.save(&scores).expect("Save failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.get(Outcome::O), 2);
    assert_eq!(loaded.get(Outcome::Draw), 1);
    assert_eq!(loaded.get(Outcome::X), 0);
}

#[test]
fn test_scores_survive_across_sessions() {
    let (_db, store) = setup_test_store();

    // First session: X wins one round.
    let mut session = GameSession::new(Box::new(store.clone()));
    for index in [0, 3, 1, 4, 2] {
        session.play(index).expect("valid move");
    }
    assert_eq!(session.scores().get(Outcome::X), 1);
    drop(session);

    // Second session over the same database picks the tally back up.
    let session = GameSession::new(Box::new(store));
    assert_eq!(session.scores().get(Outcome::X), 1);
    assert_eq!(session.scores().total(), 1);
}

#[test]
fn test_draw_round_persists() {
    let (_db, store) = setup_test_store();

    let mut session = GameSession::new(Box::new(store.clone()));
    for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
        session.play(index).expect("valid move");
    }
    drop(session);

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.get(Outcome::Draw), 1);
}

#[test]
fn test_json_shape_of_persisted_tally() {
    let (_db, store) = setup_test_store();

    let scores = Scoreboard::from_counts(2, 1, 0);
    store.save(&scores).expect("Save failed");

    let loaded = store.load().expect("Load failed");
    let json = serde_json::to_value(&loaded).expect("serialize");
    assert_eq!(json["X"], 2);
    assert_eq!(json["O"], 1);
    assert_eq!(json["Draw"], 0);
}
