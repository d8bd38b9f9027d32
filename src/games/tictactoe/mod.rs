//! Tic-tac-toe as an explicit finite-state machine.
//!
//! [`GameMachine`] is the single source of truth for a match. Front-ends
//! send [`GameEvent`]s (or call [`GameMachine::attempt_move`] and
//! [`GameMachine::reset`]) and render from [`GameMachine::snapshot`].

mod context;
mod contracts;
mod event;
mod guards;
mod invariants;
mod machine;
mod position;
mod rules;
mod snapshot;
mod types;

#[cfg(kani)]
mod verification;

pub use context::{Action, GameContext};
pub use contracts::{BoardMonotonic, Contract, ContractViolation, TransitionContract};
pub use event::{EventKind, GameEvent};
pub use guards::Guard;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MoveCountInvariant,
    OutcomeInvariant, TicTacToeInvariants,
};
pub use machine::{GameMachine, GameOver, GameState, Tag, Transition, UnknownState};
pub use position::Position;
pub use rules::{LINES, Line, has_winning_line, is_draw, is_full, winning_line};
pub use snapshot::GameSnapshot;
pub use types::{Board, CELL_COUNT, Player, Square};
