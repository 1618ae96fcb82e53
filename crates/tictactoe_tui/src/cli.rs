//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with time travel, in your terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, overriding the config file
    #[arg(long)]
    pub log_filter: Option<String>,
}
