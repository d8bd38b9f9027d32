//! Strictly Tic-Tac-Toe - CLI
//!
//! Interactive terminal play, or a headless run over a list of moves.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use strictly_tictactoe::{DisplayConfig, GameMachine, Position, status_text};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config, log_file } => run_tui(config, &log_file),
        Command::Play { moves, json } => run_play(&moves, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive terminal game, logging to a file.
fn run_tui(config: Option<PathBuf>, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    let config = DisplayConfig::load(config.as_deref())?;
    strictly_tictactoe::run_tui(config)
}

/// Play `moves` on a fresh machine and print the settled result.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_play(moves: &[Position], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let machine = play_moves(moves);
    println!("{}", play_report(&machine, json)?);
    Ok(())
}

/// Sends each move to a fresh machine, in order.
fn play_moves(moves: &[Position]) -> GameMachine {
    let mut machine = GameMachine::new();
    for &position in moves {
        let transition = machine.attempt_move(position.to_index());
        if !transition.accepted {
            info!(%position, state = %transition.from, "Move ignored");
        }
    }
    debug!(state = %machine.state(), "All moves sent");
    machine
}

/// Renders the machine as a JSON snapshot, or as the board and status.
fn play_report(machine: &GameMachine, json: bool) -> Result<String> {
    let snapshot = machine.snapshot();
    if json {
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    let mut report = format!(
        "{}\n\n{}",
        snapshot.board().display(),
        status_text(&snapshot, &DisplayConfig::default())
    );
    if !snapshot.state().is_game_over() {
        let open = Position::valid_moves(snapshot.board())
            .iter()
            .map(|position| position.label())
            .collect::<Vec<_>>()
            .join(", ");
        report.push_str(&format!("\nOpen cells: {open}"));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameSnapshot, Tag};

    #[test]
    fn test_play_report_text_while_playing() {
        let machine = play_moves(&[Position::Center, Position::TopLeft]);
        let report = play_report(&machine, false).unwrap();
        assert!(report.starts_with(&machine.context().board().display()));
        assert!(report.contains("Current player: X"));
        let open = "Open cells: Top-center, Top-right, Middle-left, Middle-right, \
                    Bottom-left, Bottom-center, Bottom-right";
        assert!(report.ends_with(open));
    }

    #[test]
    fn test_play_report_text_after_win() {
        let moves = [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ];
        let report = play_report(&play_moves(&moves), false).unwrap();
        assert!(report.ends_with("Player X wins!"));
        assert!(!report.contains("Open cells"));
    }

    #[test]
    fn test_play_report_json() {
        let machine = play_moves(&[Position::TopLeft, Position::TopLeft]);
        let report = play_report(&machine, true).unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(&report).unwrap();
        assert_eq!(snapshot, machine.snapshot());
        assert_eq!(*snapshot.moves_played(), 1);
        assert!(!snapshot.has_tag(Tag::Winner));
    }
}
