//! Strictly Tic-Tac-Toe - a tic-tac-toe rules engine as an explicit state machine
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe [`GameMachine`]: states, guards, actions
//!   and a static transition table, with contracts checked in debug builds
//! - **Config**: TOML display settings for front-ends
//! - **TUI**: a terminal front-end that only observes the machine and
//!   forwards key presses as events
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameMachine, GameOver, GameState, Player};
//!
//! let mut game = GameMachine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.attempt_move(index);
//! }
//! assert_eq!(game.state(), GameState::GameOver(GameOver::Winner));
//! assert_eq!(game.context().winner(), Some(Player::X));
//!
//! // Moves after the game ends are ignored.
//! assert!(!game.attempt_move(8).accepted);
//!
//! game.reset();
//! assert_eq!(game.state(), GameState::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DisplayConfig, Language};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, AlternatingTurnInvariant, Board, BoardMonotonic, CELL_COUNT, Contract,
    ContractViolation, EventKind, GameContext, GameEvent, GameMachine, GameOver, GameSnapshot,
    GameState, Guard, Invariant, InvariantSet, InvariantViolation, LINES, Line, MoveCountInvariant,
    OutcomeInvariant, Player, Position, Square, Tag, TicTacToeInvariants, Transition,
    TransitionContract, UnknownState, has_winning_line, is_draw, is_full, winning_line,
};

// Crate-level exports - Terminal front-end
pub use tui::{App, draw, run_tui, status_text};
