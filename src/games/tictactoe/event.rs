//! Events accepted by the game machine.
//!
//! Events are user intents forwarded by a front-end. They carry no
//! authority: the machine's guards decide whether anything happens.

use serde::{Deserialize, Serialize};

/// An event sent to the game machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// Attempt to place the current player's mark at `index`.
    #[display("PLAY({index})")]
    Play {
        /// Board index; anything outside 0-8 fails the guard.
        index: usize,
    },
    /// Start a fresh game.
    #[display("RESET")]
    Reset,
}

impl GameEvent {
    /// Returns the kind of this event, used to look up transitions.
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Play { .. } => EventKind::Play,
            GameEvent::Reset => EventKind::Reset,
        }
    }
}

/// Discriminant of [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum EventKind {
    /// [`GameEvent::Play`].
    #[display("PLAY")]
    Play,
    /// [`GameEvent::Reset`].
    #[display("RESET")]
    Reset,
}
