//! Application state and key handling.

use super::input::move_cursor;
use crate::config::DisplayConfig;
use crate::games::tictactoe::{GameMachine, GameSnapshot, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The app owns the machine but never edits its context: every key that
/// touches the game becomes an event.
#[derive(Debug)]
pub struct App {
    machine: GameMachine,
    config: DisplayConfig,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            machine: GameMachine::new(),
            config,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the game machine.
    pub fn machine(&self) -> &GameMachine {
        &self.machine
    }

    /// Gets the display config.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot to render.
    pub fn snapshot(&self) -> GameSnapshot {
        self.machine.snapshot()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.machine.reset();
                self.cursor = Position::Center;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            other => {
                self.cursor = move_cursor(self.cursor, other);
            }
        }
    }

    fn play(&mut self, position: Position) {
        let transition = self.machine.attempt_move(position.to_index());
        if !transition.accepted {
            debug!(%position, "Move ignored by engine");
        }
    }
}
