//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use strictly_timetravel::DEFAULT_CONFIG_FILE;

/// Strictly Time Travel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the log file used by the terminal UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a move sequence without a UI and print the result
    Replay {
        /// Comma-separated board indices (0-8), X first
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Jump to this step after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
