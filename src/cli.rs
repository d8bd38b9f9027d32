//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Position;

/// Strictly Tic-Tac-Toe - a rules engine you can play in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe driven by an explicit state machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a display config (TOML). Defaults are used if omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write logs while the terminal is in use
        #[arg(long, default_value = "strictly_tictactoe.log")]
        log_file: PathBuf,
    },

    /// Feed moves to a fresh game and print the result
    Play {
        /// Cells as indices (0-8) or labels (`center`, `top-left`, ...),
        /// sent in order; moves onto occupied cells are ignored
        #[arg(value_name = "CELL", value_parser = parse_cell)]
        moves: Vec<Position>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{s}' is not a cell: use 0-8 or a label such as top-left"))
}
