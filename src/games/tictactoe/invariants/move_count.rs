//! Move count invariant: every accepted move fills exactly one cell.

use super::super::GameMachine;
use super::Invariant;

/// Invariant: occupied squares equal the number of moves played.
///
/// Together with board monotonicity this means no cell is ever
/// overwritten and no move is lost.
pub struct MoveCountInvariant;

impl Invariant<GameMachine> for MoveCountInvariant {
    fn holds(machine: &GameMachine) -> bool {
        let context = machine.context();
        context.board().occupied() == usize::from(context.moves_played())
    }

    fn description() -> &'static str {
        "Occupied squares equal moves played"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameContext, GameState, Player, Square};

    #[test]
    fn test_holds_after_moves() {
        let mut machine = GameMachine::new();
        machine.attempt_move(0);
        machine.attempt_move(0);
        machine.attempt_move(5);
        assert_eq!(machine.context().moves_played(), 2);
        assert!(MoveCountInvariant::holds(&machine));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(1, Square::Occupied(Player::O)).unwrap();
        let context = GameContext::from_parts(board, 1, Player::O, None);
        let machine = GameMachine::from_parts(GameState::Playing, context);
        assert!(!MoveCountInvariant::holds(&machine));
    }
}
