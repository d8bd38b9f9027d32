//! Kani proof harnesses for the game machine.
//!
//! Explores every event sequence up to a small bound and checks the
//! invariants hold after each event.

use super::{GameEvent, GameMachine, GameState, InvariantSet, TicTacToeInvariants};

impl kani::Arbitrary for GameEvent {
    fn any() -> Self {
        if kani::any() {
            GameEvent::Reset
        } else {
            // Include out-of-range indices.
            let index: u8 = kani::any();
            kani::assume(index < 12);
            GameEvent::Play {
                index: usize::from(index),
            }
        }
    }
}

/// Invariants hold after any sequence of events.
#[kani::proof]
#[kani::unwind(11)]
fn verify_invariants_hold_for_event_sequences() {
    let mut machine = GameMachine::new();
    let len: u8 = kani::any();
    kani::assume(len <= 10);
    for _ in 0..len {
        let event: GameEvent = kani::any();
        let result = machine.try_send(event);
        assert!(result.is_ok(), "contract violated");
        assert!(TicTacToeInvariants::check_all(&machine).is_ok());
    }
}

/// A move sent to a finished game changes nothing.
#[kani::proof]
#[kani::unwind(11)]
fn verify_game_over_ignores_moves() {
    let mut machine = GameMachine::new();
    for _ in 0..10 {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        machine.attempt_move(usize::from(index));
    }
    kani::assume(machine.state() != GameState::Playing);

    let before = machine.clone();
    let index: u8 = kani::any();
    let transition = machine.attempt_move(usize::from(index));
    assert!(!transition.accepted);
    assert!(machine == before);
}
