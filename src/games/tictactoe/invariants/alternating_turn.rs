//! Alternating turn invariant: X moves on even counts, O on odd.

use super::super::{GameMachine, Player};
use super::Invariant;

/// Invariant: Players alternate turns, starting with X.
///
/// The player to move is fully determined by the move count. Once a game
/// is won the turn has already flipped past the winner, so the rule holds
/// in every state.
pub struct AlternatingTurnInvariant;

impl Invariant<GameMachine> for AlternatingTurnInvariant {
    fn holds(machine: &GameMachine) -> bool {
        let context = machine.context();
        let expected = if context.moves_played() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        context.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
