use crate::action::{ActionTransition, Input};
use crate::engine::{Phase, Rejection, StepEvent, narrative};
use crate::state::Session;

/// Enters aim mode from exploring, or leaves it again without firing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleAimAction;

impl ActionTransition for ToggleAimAction {
    fn pre_validate(&self, session: &Session) -> Result<(), Rejection> {
        match session.phase {
            Phase::Aiming(_) => Ok(()),
            Phase::Exploring(_) if session.player.arrows == 0 => Err(Rejection::NoArrows),
            Phase::Exploring(_) if !session.wumpus.alive => Err(Rejection::WumpusDead),
            Phase::Exploring(_) => Ok(()),
            phase => Err(Rejection::NotPermitted {
                input: Input::ToggleAim,
                phase,
            }),
        }
    }

    fn apply(&self, session: &mut Session) -> StepEvent {
        let aiming = match session.phase {
            Phase::Exploring(objective) => {
                session.phase = Phase::Aiming(objective);
                session.narrate(narrative::AIM_ON);
                true
            }
            Phase::Aiming(objective) => {
                session.phase = Phase::Exploring(objective);
                session.narrate(narrative::AIM_OFF);
                false
            }
            _ => session.phase.is_aiming(),
        };
        StepEvent::AimToggled { aiming }
    }
}
