//! Serializable read-only view of a machine.

use super::machine::{GameMachine, GameState, Tag};
use super::rules::Line;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// State value.
    state: GameState,
    /// Tags of the state.
    tags: Vec<Tag>,
    /// Board cells, row-major.
    board: Board,
    /// Accepted moves since the last reset.
    moves_played: u8,
    /// Player to move.
    current_player: Player,
    /// Winner, once the game is won.
    winner: Option<Player>,
    /// Completed line, once the game is won.
    winning_line: Option<Line>,
}

impl GameSnapshot {
    /// Captures the machine's settled state.
    pub fn from_machine(machine: &GameMachine) -> Self {
        let context = machine.context();
        Self {
            state: machine.state(),
            tags: machine.state().tags().to_vec(),
            board: *context.board(),
            moves_played: context.moves_played(),
            current_player: context.current_player(),
            winner: context.winner(),
            winning_line: machine.winning_line(),
        }
    }

    /// True if the snapshot's state carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether a front-end should let the user pick the cell at `index`.
    ///
    /// Mirrors the engine's guard for display purposes only.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        !self.state.is_game_over() && self.board.is_empty(index)
    }
}
