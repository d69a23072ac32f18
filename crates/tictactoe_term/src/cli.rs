//! Command-line interface for the terminal front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Theme file (TOML). Uses the built-in theme if omitted.
    #[arg(long, global = true)]
    pub theme: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one cell per line
    Play,

    /// Apply a list of cell indices and print the result
    Replay {
        /// Cell indices in play order, comma separated (e.g. 0,3,1,4,2)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        moves: Vec<i64>,
    },
}
