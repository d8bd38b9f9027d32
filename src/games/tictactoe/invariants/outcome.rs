//! Outcome invariant: the state value agrees with the board.

use super::super::rules::{has_winning_line, is_full};
use super::super::{GameMachine, GameOver, GameState};
use super::Invariant;

/// Invariant: state, winner and board tell the same story.
///
/// - `playing`: no winner recorded, no completed line, board not full
/// - `gameOver.winner`: winner recorded and a completed line exists
/// - `gameOver.draw`: no winner, full board, no completed line
pub struct OutcomeInvariant;

impl Invariant<GameMachine> for OutcomeInvariant {
    fn holds(machine: &GameMachine) -> bool {
        let context = machine.context();
        let board = context.board();
        let line = has_winning_line(board);
        match machine.state() {
            GameState::Playing => context.winner().is_none() && !line && !is_full(board),
            GameState::GameOver(GameOver::Winner) => context.winner().is_some() && line,
            GameState::GameOver(GameOver::Draw) => {
                context.winner().is_none() && !line && is_full(board)
            }
        }
    }

    fn description() -> &'static str {
        "State value matches winner and board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameContext, Player};

    #[test]
    fn test_holds_for_win() {
        let mut machine = GameMachine::new();
        for index in [0, 3, 1, 4, 2] {
            machine.attempt_move(index);
        }
        assert!(OutcomeInvariant::holds(&machine));
    }

    #[test]
    fn test_holds_for_draw() {
        let mut machine = GameMachine::new();
        for index in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
            machine.attempt_move(index);
        }
        assert!(OutcomeInvariant::holds(&machine));
    }

    #[test]
    fn test_winner_without_line_violates() {
        let context = GameContext::from_parts(Default::default(), 0, Player::X, Some(Player::O));
        let machine = GameMachine::from_parts(GameState::GameOver(GameOver::Winner), context);
        assert!(!OutcomeInvariant::holds(&machine));
    }

    #[test]
    fn test_draw_on_empty_board_violates() {
        let machine =
            GameMachine::from_parts(GameState::GameOver(GameOver::Draw), GameContext::new());
        assert!(!OutcomeInvariant::holds(&machine));
    }
}
