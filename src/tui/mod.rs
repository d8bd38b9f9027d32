//! Terminal front-end.
//!
//! A thin observer of [`GameMachine`](crate::GameMachine): it renders
//! snapshots and turns key presses into engine events.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::{draw, status_text};

use crate::config::DisplayConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failure while entering the alternate screen.
#[instrument(skip_all)]
pub fn run_tui(config: DisplayConfig) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    let app = App::new(config);
    enable_raw_mode()?;
    with_restore(|| run_on_alternate_screen(app), restore_terminal)
}

fn run_on_alternate_screen(app: App) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_app(&mut terminal, app)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// The body's error wins over a restore error.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let value = res?;
    restored?;
    Ok(value)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
