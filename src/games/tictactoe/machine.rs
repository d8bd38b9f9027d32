//! The tic-tac-toe state machine.
//!
//! States, guards and actions are wired together by a static dispatch
//! table mirroring this chart:
//!
//! ```text
//! playing ── PLAY [isValidMove] / updateBoard ──▶ playing
//!    │ always [checkWin]  ──▶ gameOver.winner  (entry / setWinner, tag: winner)
//!    │ always [checkDraw] ──▶ gameOver.draw    (tag: draw)
//! playing ─── RESET / resetGame ──▶ playing
//! gameOver ── RESET / resetGame ──▶ playing
//! ```
//!
//! Events without a matching rule, or whose guard fails, are dropped
//! without touching the machine.

use super::context::{Action, GameContext};
use super::contracts::ContractViolation;
use super::event::{EventKind, GameEvent};
use super::guards::Guard;
use super::rules::{self, Line};
use super::snapshot::GameSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

#[cfg(debug_assertions)]
use super::contracts::{Contract, TransitionContract};

/// Substates of `gameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "camelCase")]
pub enum GameOver {
    /// A line was completed.
    #[display("winner")]
    Winner,
    /// The board filled with no line completed.
    #[display("draw")]
    Draw,
}

/// State value of the machine.
///
/// Serializes as its dotted name (`"playing"`, `"gameOver.winner"`,
/// `"gameOver.draw"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(into = "String", try_from = "String")]
pub enum GameState {
    /// Moves are accepted.
    #[default]
    #[display("playing")]
    Playing,
    /// Terminal until reset.
    #[display("gameOver.{_0}")]
    GameOver(GameOver),
}

impl GameState {
    /// Tags carried by this state.
    pub fn tags(self) -> &'static [Tag] {
        match self {
            GameState::Playing => &[],
            GameState::GameOver(GameOver::Winner) => &[Tag::Winner],
            GameState::GameOver(GameOver::Draw) => &[Tag::Draw],
        }
    }

    /// True in either `gameOver` substate.
    pub fn is_game_over(self) -> bool {
        matches!(self, GameState::GameOver(_))
    }
}

/// A state name that does not belong to the chart.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown game state: {name}")]
pub struct UnknownState {
    /// The rejected name.
    pub name: String,
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.to_string()
    }
}

impl TryFrom<String> for GameState {
    type Error = UnknownState;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.as_str() {
            "playing" => Ok(GameState::Playing),
            "gameOver.winner" => Ok(GameState::GameOver(GameOver::Winner)),
            "gameOver.draw" => Ok(GameState::GameOver(GameOver::Draw)),
            _ => Err(UnknownState { name }),
        }
    }
}

/// Labels observers branch on instead of matching state values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Attached to `gameOver.winner`.
    #[display("winner")]
    Winner,
    /// Attached to `gameOver.draw`.
    #[display("draw")]
    Draw,
}

/// An event-driven transition: optional guard, actions, target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransitionRule {
    guard: Option<Guard>,
    actions: &'static [Action],
    target: GameState,
}

/// An eventless transition taken as soon as its guard holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AlwaysRule {
    guard: Guard,
    target: GameState,
}

const PLAY: TransitionRule = TransitionRule {
    guard: Some(Guard::IsValidMove),
    actions: &[Action::UpdateBoard],
    target: GameState::Playing,
};

const RESET: TransitionRule = TransitionRule {
    guard: None,
    actions: &[Action::ResetGame],
    target: GameState::Playing,
};

const PLAYING_ALWAYS: [AlwaysRule; 2] = [
    AlwaysRule {
        guard: Guard::CheckWin,
        target: GameState::GameOver(GameOver::Winner),
    },
    AlwaysRule {
        guard: Guard::CheckDraw,
        target: GameState::GameOver(GameOver::Draw),
    },
];

/// Looks up the rule handling `kind` in `state`.
fn rule_for(state: GameState, kind: EventKind) -> Option<TransitionRule> {
    match (state, kind) {
        (GameState::Playing, EventKind::Play) => Some(PLAY),
        (_, EventKind::Reset) => Some(RESET),
        (GameState::GameOver(_), EventKind::Play) => None,
    }
}

/// Eventless rules of `state`, in priority order.
fn always_for(state: GameState) -> &'static [AlwaysRule] {
    match state {
        GameState::Playing => &PLAYING_ALWAYS,
        GameState::GameOver(_) => &[],
    }
}

/// Entry actions of `state`.
fn entry_for(state: GameState) -> &'static [Action] {
    match state {
        GameState::GameOver(GameOver::Winner) => &[Action::SetWinner],
        _ => &[],
    }
}

/// Outcome of sending one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The event processed.
    pub event: GameEvent,
    /// State before the event.
    pub from: GameState,
    /// State after the event settled.
    pub to: GameState,
    /// False when no rule matched or the guard failed.
    pub accepted: bool,
}

impl Transition {
    fn ignored(event: GameEvent, state: GameState) -> Self {
        Self {
            event,
            from: state,
            to: state,
            accepted: false,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the only copy of the game context. Each event runs to
/// completion (guard, actions, eventless transitions, entry actions)
/// before the call returns, so readers always see a settled machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMachine {
    state: GameState,
    context: GameContext,
}

impl GameMachine {
    /// Creates a machine in `playing` with the initial context.
    ///
    /// Both eventless guards are false on an empty board, so the
    /// initial state is already settled.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::Playing,
            context: GameContext::new(),
        }
    }

    /// Builds a machine from raw parts, bypassing the transition table.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(state: GameState, context: GameContext) -> Self {
        Self { state, context }
    }

    /// Current state value.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current context.
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// True if the current state carries `tag`.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.state.tags().contains(&tag)
    }

    /// The completed line, when the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.context.board())
    }

    /// Owned, serializable view of the machine.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_machine(self)
    }

    /// Places the current player's mark at `index` if the move is legal.
    ///
    /// Illegal moves (occupied cell, index outside 0-8, game over) are
    /// ignored; the returned transition has `accepted == false`.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn attempt_move(&mut self, index: usize) -> Transition {
        self.send(GameEvent::Play { index })
    }

    /// Starts a fresh game. Always accepted.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn reset(&mut self) -> Transition {
        self.send(GameEvent::Reset)
    }

    /// Sends an event, aborting on a contract violation.
    ///
    /// A violation means the engine itself is broken; it cannot be caused
    /// by any event a collaborator sends.
    pub fn send(&mut self, event: GameEvent) -> Transition {
        match self.try_send(event) {
            Ok(transition) => transition,
            Err(violation) => {
                error!(%event, %violation, "Contract violation in game machine");
                panic!("game machine contract violated on {event}: {violation}");
            }
        }
    }

    /// Sends an event, returning contract violations instead of aborting.
    ///
    /// On error the machine is left exactly as it was before the event.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn try_send(&mut self, event: GameEvent) -> Result<Transition, ContractViolation> {
        let from = self.state;

        let Some(rule) = rule_for(from, event.kind()) else {
            debug!(%event, "No transition for event in this state; ignored");
            return Ok(Transition::ignored(event, from));
        };

        if let Some(guard) = rule.guard
            && !guard.evaluate(&self.context, &event)
        {
            debug!(%event, %guard, "Guard rejected event; ignored");
            return Ok(Transition::ignored(event, from));
        }

        let mut next = self.clone();
        for action in rule.actions {
            action.execute(&mut next.context, &event)?;
        }
        next.enter(rule.target, &event)?;

        #[cfg(debug_assertions)]
        TransitionContract::post(self, &event, &next)?;

        *self = next;
        info!(
            %event,
            %from,
            to = %self.state,
            moves_played = self.context.moves_played(),
            "Transition taken"
        );
        if let Some(winner) = self.context.winner() {
            info!(%winner, "Game won");
        } else if self.state == GameState::GameOver(GameOver::Draw) {
            info!("Game drawn");
        }

        Ok(Transition {
            event,
            from,
            to: self.state,
            accepted: true,
        })
    }

    /// Enters `target`: runs its entry actions, then follows the first
    /// eventless rule whose guard holds.
    fn enter(&mut self, target: GameState, event: &GameEvent) -> Result<(), ContractViolation> {
        self.state = target;
        for action in entry_for(target) {
            action.execute(&mut self.context, event)?;
        }

        let next = always_for(target)
            .iter()
            .find(|rule| rule.guard.evaluate(&self.context, event));
        match next {
            Some(rule) => self.enter(rule.target, event),
            None => Ok(()),
        }
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new()
    }
}
