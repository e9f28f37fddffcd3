//! Command-line interface.

use clap::{Parser, Subcommand};

/// Terminal tic-tac-toe with a persistent score tally
#[derive(Parser, Debug)]
#[command(name = "tictactoe_scoreboard")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the score database (created if it doesn't exist)
        #[arg(long, default_value = "tictactoe_scores.db")]
        db_path: String,

        /// Keep scores in memory only; nothing is persisted
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the persisted score tally
    Scores {
        /// Path to the score database
        #[arg(long, default_value = "tictactoe_scores.db")]
        db_path: String,

        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Zero the persisted score tally
    ResetScores {
        /// Path to the score database
        #[arg(long, default_value = "tictactoe_scores.db")]
        db_path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::parse_from(["tictactoe_scoreboard", "play"]);
        match cli.command {
            Command::Play { db_path, ephemeral } => {
                assert_eq!(db_path, "tictactoe_scores.db");
                assert!(!ephemeral);
            }
            _ => panic!("expected play command"),
        }
    }

    #[test]
    fn test_scores_json_flag() {
        let cli = Cli::parse_from(["tictactoe_scoreboard", "scores", "--json"]);
        match cli.command {
            Command::Scores { json, .. } => assert!(json),
            _ => panic!("expected scores command"),
        }
    }
}
