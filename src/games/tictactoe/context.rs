//! Machine context and the named actions that transform it.

use super::contracts::ContractViolation;
use super::event::GameEvent;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mutable data carried alongside the machine state.
///
/// Only [`Action`]s executed by the machine write to it; collaborators
/// get shared references or clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    board: Board,
    moves_played: u8,
    current_player: Player,
    winner: Option<Player>,
}

impl GameContext {
    /// Initial context: empty board, X to move, no winner.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            moves_played: 0,
            current_player: Player::X,
            winner: None,
        }
    }

    /// Builds a context from raw fields, bypassing the actions.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(
        board: Board,
        moves_played: u8,
        current_player: Player,
        winner: Option<Player>,
    ) -> Self {
        Self {
            board,
            moves_played,
            current_player,
            winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves since the last reset (0-9).
    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    /// Player whose mark the next accepted move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, set on entry to the winner state.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Named context transformations referenced by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the current player's mark, count the move, flip the turn.
    #[display("updateBoard")]
    UpdateBoard,
    /// Record the player who just moved as winner.
    #[display("setWinner")]
    SetWinner,
    /// Reinitialize the whole context.
    #[display("resetGame")]
    ResetGame,
}

impl Action {
    /// Runs the action against `context` for the event being processed.
    ///
    /// Either every field the action owns is written or none is.
    #[instrument(skip(context))]
    pub(super) fn execute(
        self,
        context: &mut GameContext,
        event: &GameEvent,
    ) -> Result<(), ContractViolation> {
        match self {
            Action::UpdateBoard => {
                let GameEvent::Play { index } = *event else {
                    return Err(ContractViolation::UnexpectedEvent {
                        action: self,
                        received: event.kind(),
                    });
                };
                let mut board = context.board;
                board.set(index, Square::Occupied(context.current_player))?;
                context.board = board;
                context.moves_played += 1;
                context.current_player = context.current_player.opponent();
            }
            Action::SetWinner => {
                // The turn has already flipped, so the mover is the opponent.
                context.winner = Some(context.current_player.opponent());
            }
            Action::ResetGame => {
                *context = GameContext::new();
            }
        }
        debug!(action = %self, moves_played = context.moves_played, "Action executed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::EventKind;

    #[test]
    fn test_update_board_places_counts_and_flips() {
        let mut context = GameContext::new();
        Action::UpdateBoard
            .execute(&mut context, &GameEvent::Play { index: 4 })
            .unwrap();
        assert_eq!(context.board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(context.moves_played(), 1);
        assert_eq!(context.current_player(), Player::O);
    }

    #[test]
    fn test_update_board_rejects_reset_event() {
        let mut context = GameContext::new();
        let result = Action::UpdateBoard.execute(&mut context, &GameEvent::Reset);
        assert_eq!(
            result,
            Err(ContractViolation::UnexpectedEvent {
                action: Action::UpdateBoard,
                received: EventKind::Reset,
            })
        );
        assert_eq!(context, GameContext::new());
    }

    #[test]
    fn test_update_board_out_of_bounds_leaves_context() {
        let mut context = GameContext::new();
        let result = Action::UpdateBoard.execute(&mut context, &GameEvent::Play { index: 9 });
        assert_eq!(result, Err(ContractViolation::OutOfBounds(9)));
        assert_eq!(context, GameContext::new());
    }

    #[test]
    fn test_set_winner_credits_previous_mover() {
        let mut context = GameContext::new();
        Action::UpdateBoard
            .execute(&mut context, &GameEvent::Play { index: 0 })
            .unwrap();
        Action::SetWinner
            .execute(&mut context, &GameEvent::Play { index: 0 })
            .unwrap();
        assert_eq!(context.current_player(), Player::O);
        assert_eq!(context.winner(), Some(Player::X));
    }

    #[test]
    fn test_reset_game_restores_initial() {
        let mut context = GameContext::new();
        Action::UpdateBoard
            .execute(&mut context, &GameEvent::Play { index: 2 })
            .unwrap();
        Action::ResetGame
            .execute(&mut context, &GameEvent::Reset)
            .unwrap();
        assert_eq!(context, GameContext::new());
    }
}
