//! Command-line interface for tictactoe_tui.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with clickable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the newest move at the top of the list
    #[arg(long)]
    pub descending: bool,
}
