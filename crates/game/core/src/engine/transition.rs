//! Input dispatch and the validate → apply → verify pipeline.

use tracing::{debug, warn};

use crate::action::{
    AcknowledgeAction, ActionTransition, Input, MoveAction, ShootAction, ToggleAimAction,
};
use crate::state::Session;

use super::{Rejection, StepEvent};

/// Runs a transition against a working copy and commits it only on success.
///
/// Stages:
/// 1. `pre_validate` - refuse inputs the current phase does not permit
/// 2. `apply` - mutate the working copy
/// 3. invariant check - the working copy must still be a valid session
#[inline]
fn drive_transition<T>(transition: &T, session: &mut Session) -> Result<StepEvent, Rejection>
where
    T: ActionTransition,
{
    transition.pre_validate(session)?;

    let mut working = session.clone();
    let event = transition.apply(&mut working);

    if let Err(violation) = working.check_invariants() {
        warn!(
            target: "wumpus_core::engine",
            session = %session.id(),
            violation,
            "Transition broke a session invariant, discarding"
        );
        return Err(Rejection::InvariantViolated(violation));
    }
    if working.turn < session.turn {
        return Err(Rejection::InvariantViolated("turn counter regressed"));
    }

    *session = working;
    Ok(event)
}

/// Routes a typed input to its transition.
pub(super) fn execute_transition(
    input: Input,
    session: &mut Session,
) -> Result<StepEvent, Rejection> {
    let result = match input {
        Input::Move(direction) => drive_transition(&MoveAction::new(direction), session),
        Input::Shoot(direction) => drive_transition(&ShootAction::new(direction), session),
        Input::ToggleAim => drive_transition(&ToggleAimAction, session),
        Input::Acknowledge => drive_transition(&AcknowledgeAction, session),
    };

    if let Err(rejection) = &result {
        debug!(
            target: "wumpus_core::engine",
            session = %session.id(),
            ?input,
            %rejection,
            "Input rejected"
        );
    }
    result
}
