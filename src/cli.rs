//! Command-line interface for strictly_boxes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Boxes - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_boxes")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay a move list without a terminal UI
    Replay {
        /// Moves as indices 0-8 or labels, separated by commas or spaces
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
