//! Named guard predicates referenced by the transition table.

use super::context::GameContext;
use super::event::GameEvent;
use super::rules;
use serde::{Deserialize, Serialize};

/// A predicate that must hold for a transition to be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Guard {
    /// The event is a move onto an existing, empty cell.
    #[display("isValidMove")]
    IsValidMove,
    /// Some line is held by one player.
    #[display("checkWin")]
    CheckWin,
    /// All nine moves have been played.
    #[display("checkDraw")]
    CheckDraw,
}

impl Guard {
    /// Evaluates the guard. Never fails: unusable input is simply `false`.
    ///
    /// Guards are only consulted from rules owned by the state they belong
    /// to, so `IsValidMove` does not need to re-check the machine state.
    pub fn evaluate(self, context: &GameContext, event: &GameEvent) -> bool {
        match self {
            Guard::IsValidMove => match *event {
                GameEvent::Play { index } => context.board().is_empty(index),
                GameEvent::Reset => false,
            },
            Guard::CheckWin => rules::has_winning_line(context.board()),
            Guard::CheckDraw => rules::is_draw(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Action;

    #[test]
    fn test_valid_move_on_empty_cell() {
        let context = GameContext::new();
        assert!(Guard::IsValidMove.evaluate(&context, &GameEvent::Play { index: 0 }));
        assert!(Guard::IsValidMove.evaluate(&context, &GameEvent::Play { index: 8 }));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let context = GameContext::new();
        assert!(!Guard::IsValidMove.evaluate(&context, &GameEvent::Play { index: 9 }));
        assert!(!Guard::IsValidMove.evaluate(&context, &GameEvent::Play { index: usize::MAX }));
    }

    #[test]
    fn test_occupied_is_invalid() {
        let mut context = GameContext::new();
        let event = GameEvent::Play { index: 3 };
        Action::UpdateBoard.execute(&mut context, &event).unwrap();
        assert!(!Guard::IsValidMove.evaluate(&context, &event));
    }

    #[test]
    fn test_reset_is_never_a_valid_move() {
        assert!(!Guard::IsValidMove.evaluate(&GameContext::new(), &GameEvent::Reset));
    }

    #[test]
    fn test_win_and_draw_false_on_empty() {
        let context = GameContext::new();
        assert!(!Guard::CheckWin.evaluate(&context, &GameEvent::Reset));
        assert!(!Guard::CheckDraw.evaluate(&context, &GameEvent::Reset));
    }
}
