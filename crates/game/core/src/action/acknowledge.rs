use crate::action::{ActionTransition, Input};
use crate::engine::{Handoff, Objective, OnboardingStep, Phase, Rejection, StepEvent, narrative};
use crate::state::Session;

/// Dismisses whatever the current phase is waiting on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcknowledgeAction;

impl AcknowledgeAction {
    fn resume(session: &mut Session, objective: Objective) -> StepEvent {
        let phase = Phase::Exploring(objective);
        session.phase = phase;
        let hint = session.hint(objective);
        session.narrate(hint);
        StepEvent::Resumed { phase }
    }

    /// Practice deaths step back one tile; live deaths hand off for a reset.
    fn recover(session: &mut Session) -> StepEvent {
        match session.revert.take() {
            Some(revert) if session.config.is_practice() => {
                session.player.position = revert.position;
                session.phase = Phase::Exploring(revert.resume);
                session.narrate(narrative::REVERTED);
                StepEvent::Reverted {
                    to: revert.position,
                }
            }
            pending => {
                session.revert = pending;
                StepEvent::Handoff(Handoff::RequireReset)
            }
        }
    }
}

impl ActionTransition for AcknowledgeAction {
    fn pre_validate(&self, session: &Session) -> Result<(), Rejection> {
        if session.phase.awaits_acknowledgement() {
            Ok(())
        } else {
            Err(Rejection::NotPermitted {
                input: Input::Acknowledge,
                phase: session.phase,
            })
        }
    }

    fn apply(&self, session: &mut Session) -> StepEvent {
        match session.phase {
            Phase::Onboarding(OnboardingStep::Welcome) => {
                let phase = Phase::Onboarding(OnboardingStep::Controls);
                session.phase = phase;
                StepEvent::Resumed { phase }
            }
            Phase::Onboarding(OnboardingStep::Controls) => Self::resume(session, Objective::Survey),
            Phase::Interrupt { cue, resume } => {
                Self::resume(session, Objective::after_interrupt(cue, resume))
            }
            Phase::WumpusKilled => Self::resume(session, Objective::Treasure),
            Phase::Won if session.config.is_practice() => StepEvent::Handoff(Handoff::ExitPractice),
            Phase::Won => StepEvent::Handoff(Handoff::OfferReplay),
            Phase::LostPit | Phase::LostWumpus => Self::recover(session),
            Phase::Exploring(_) | Phase::Aiming(_) => StepEvent::Resumed {
                phase: session.phase,
            },
        }
    }
}
