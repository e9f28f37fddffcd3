//! Tic Tac Toe Scoreboard - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_scoreboard::{
    GameSession, MemoryScoreStore, Scoreboard, ScoreStore, SqliteScoreStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { db_path, ephemeral } => run_play(db_path, ephemeral),
        Command::Scores { db_path, json } => run_scores(db_path, json),
        Command::ResetScores { db_path } => run_reset_scores(db_path),
    }
}

/// Run the interactive terminal game.
fn run_play(db_path: String, ephemeral: bool) -> Result<()> {
    // Log to a file so tracing output doesn't corrupt the TUI.
    let log_file = std::fs::File::create("tictactoe_scoreboard.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let store: Box<dyn ScoreStore> = if ephemeral {
        info!("Running with ephemeral in-memory scores");
        Box::new(MemoryScoreStore::new())
    } else {
        info!(path = %db_path, "Using SQLite score store");
        Box::new(SqliteScoreStore::new(db_path))
    };

    let session = GameSession::new(store);
    tictactoe_scoreboard::tui::run(session)
}

/// Print the persisted tally to stdout.
fn run_scores(db_path: String, json: bool) -> Result<()> {
    init_stderr_logging();

    let store = SqliteScoreStore::new(db_path);
    let scores = store.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!("{}", scores);
    }
    Ok(())
}

/// Zero the persisted tally.
fn run_reset_scores(db_path: String) -> Result<()> {
    init_stderr_logging();

    let store = SqliteScoreStore::new(db_path);
    store.save(&Scoreboard::new())?;
    info!("Scores reset");
    println!("Scores reset.");
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
