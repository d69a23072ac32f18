//! Tic-tac-toe terminal front end.
//!
//! Renders a [`tictactoe::GameSession`] as text and feeds it moves from
//! stdin or the command line.

#![warn(missing_docs)]

mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::Theme;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)?,
        None => Theme::default(),
    };

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let stdin = std::io::stdin();
            play::play(stdin.lock(), std::io::stdout(), &theme)
        }
        Command::Replay { moves } => {
            info!(count = moves.len(), "Replaying moves");
            println!("{}", play::replay(&moves, &theme));
            Ok(())
        }
    }
}
