//! Contract checks for machine transitions.
//!
//! Guards decide whether an event is accepted; contracts check that an
//! accepted transition left the machine in a coherent state. A contract
//! failure is a [`ContractViolation`]: an engine bug, never a user error.

use super::context::Action;
use super::event::{EventKind, GameEvent};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::machine::GameMachine;
use super::types::{Board, Square};
use tracing::{instrument, warn};

/// Internal fault raised when the engine's own contract is broken.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ContractViolation {
    /// An action ran for an event it was not written for.
    #[display("Action {action} cannot run on event {received}")]
    UnexpectedEvent {
        /// The action that was driven.
        action: Action,
        /// The kind of event it received.
        received: EventKind,
    },

    /// A write addressed a cell outside the board.
    #[display("Board index {_0} is out of bounds")]
    OutOfBounds(usize),

    /// A post-transition invariant failed.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for ContractViolation {}

/// Postcondition over a state transition `before --event--> after`.
pub trait Contract<S, E> {
    /// Checks the transition maintained system guarantees.
    fn post(before: &S, event: &E, after: &S) -> Result<(), ContractViolation>;
}

/// Occupied squares are never cleared or overwritten except by a reset.
pub struct BoardMonotonic;

impl BoardMonotonic {
    /// True if every square occupied in `before` is unchanged in `after`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Board, after: &Board) -> bool {
        let valid = before
            .squares()
            .iter()
            .zip(after.squares())
            .all(|(b, a)| *b == Square::Empty || b == a);
        if !valid {
            warn!("Board monotonicity violated");
        }
        valid
    }
}

/// Contract for every event the machine processes.
///
/// Postconditions:
/// - Board stays monotonic unless the event was a reset
/// - All single-state invariants hold on the settled machine
pub struct TransitionContract;

impl Contract<GameMachine, GameEvent> for TransitionContract {
    fn post(
        before: &GameMachine,
        event: &GameEvent,
        after: &GameMachine,
    ) -> Result<(), ContractViolation> {
        if event.kind() != EventKind::Reset
            && !BoardMonotonic::holds(before.context().board(), after.context().board())
        {
            return Err(ContractViolation::InvariantViolation(
                "Board squares are monotonic (never overwritten)".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            ))
        })
    }
}
