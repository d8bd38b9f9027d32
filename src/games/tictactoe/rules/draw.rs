//! Draw detection logic for tic-tac-toe.

use super::super::{Board, GameContext, Square};
use super::super::types::CELL_COUNT;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True once all nine moves have been played.
///
/// Only meaningful after the win check failed: a ninth move that also
/// completes a line is a win.
#[instrument]
pub fn is_draw(context: &GameContext) -> bool {
    usize::from(context.moves_played()) == CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameMachine, Player};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_squares([Square::Occupied(Player::O); CELL_COUNT]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_fresh_context_not_draw() {
        assert!(!is_draw(&GameContext::new()));
    }

    #[test]
    fn test_nine_moves_is_draw() {
        let mut machine = GameMachine::new();
        for index in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
            machine.attempt_move(index);
        }
        assert!(is_draw(machine.context()));
        assert!(is_full(machine.context().board()));
    }
}
