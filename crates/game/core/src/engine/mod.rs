//! Phase state machine and input execution pipeline.
//!
//! The [`GameEngine`] is the only reducer for [`Session`]. Every input flows
//! through the same pipeline: the current phase decides whether the input is
//! permitted, the matching transition resolves movement or combat, senses are
//! recomputed, and the next phase is chosen. A rejected input never mutates the
//! session.

mod errors;
pub mod narrative;
mod phase;
mod transition;

pub use errors::Rejection;
pub use phase::{Handoff, Objective, OnboardingStep, Phase};

use tracing::debug;

use crate::action::{Direction, Input};
use crate::state::{Position, Session};

/// What an accepted input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The player walked onto a new tile and consumed a turn.
    Moved { from: Position, to: Position },
    /// The move would have left the grid. Nothing changed.
    Blocked { at: Position, direction: Direction },
    AimToggled { aiming: bool },
    ShotResolved { direction: Direction, hit: bool },
    /// An acknowledgment moved the session to its next phase.
    Resumed { phase: Phase },
    /// A practice death was undone and the player stepped back.
    Reverted { to: Position },
    /// The session is finished with this phase; the host takes over.
    Handoff(Handoff),
}

/// Outcome of one accepted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub event: StepEvent,
    /// Phase after the input was resolved.
    pub phase: Phase,
    pub turn: u64,
}

/// Reducer that applies typed inputs to a borrowed session.
///
/// The engine holds no state of its own; any number of sessions can be driven
/// side by side by constructing one engine per call.
pub struct GameEngine<'a> {
    session: &'a mut Session,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given session.
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Resolves one input.
    ///
    /// Returns the resulting [`Step`], or the [`Rejection`] explaining why the
    /// current phase refused the input. Rejections leave the session exactly as
    /// it was.
    pub fn execute(&mut self, input: Input) -> Result<Step, Rejection> {
        let before = self.session.phase();
        let event = transition::execute_transition(input, self.session)?;
        let step = Step {
            event,
            phase: self.session.phase(),
            turn: self.session.turn(),
        };

        debug!(
            target: "wumpus_core::engine",
            session = %self.session.id(),
            ?input,
            from = %before,
            to = %step.phase,
            turn = step.turn,
            "Input resolved"
        );

        Ok(step)
    }

    pub fn session(&self) -> &Session {
        self.session
    }
}
