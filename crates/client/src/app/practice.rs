//! Offline tutorial driven directly by the core engine.
use wumpus_core::{GameEngine, Input, OnboardingStep, Phase, Session, StepEvent};

use super::Flow;
use crate::input::KeyAction;
use crate::render;

const WELCOME: &str = "Welcome, hunter. Somewhere in this dungeon lies gold, \
a bottomless pit or two, and the Wumpus.";
const CONTROLS: &str = "Move with w/a/s/d. Press f to aim your single arrow, \
then a direction to fire. Press Enter to dismiss popups.";

/// Tutorial session on the fixed practice layout.
pub struct PracticeDriver {
    session: Session,
    notice: Option<String>,
}

impl PracticeDriver {
    pub fn new() -> Self {
        Self {
            session: Session::practice(),
            notice: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies one command. Rejected inputs become a one-off notice.
    pub fn handle(&mut self, action: KeyAction) -> Flow {
        let input = match action {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::None => return Flow::Continue,
            KeyAction::Reset => {
                tracing::info!("Practice session reset");
                self.session = Session::practice();
                return Flow::Continue;
            }
            KeyAction::DirectionalInput(direction) => {
                Input::directional(direction, self.session.phase().is_aiming())
            }
            KeyAction::ToggleAim => Input::ToggleAim,
            KeyAction::Acknowledge => Input::Acknowledge,
        };

        match GameEngine::new(&mut self.session).execute(input) {
            Ok(step) => match step.event {
                StepEvent::Handoff(handoff) => Flow::Handoff(handoff),
                _ => Flow::Continue,
            },
            Err(rejection) => {
                self.notice = Some(rejection.to_string());
                Flow::Continue
            }
        }
    }

    /// Current screen: popup text or the board.
    pub fn view(&mut self) -> String {
        let mut out = String::new();
        match self.session.phase() {
            Phase::Onboarding(OnboardingStep::Welcome) => {
                out.push_str(WELCOME);
                out.push('\n');
            }
            Phase::Onboarding(OnboardingStep::Controls) => {
                out.push_str(CONTROLS);
                out.push('\n');
            }
            Phase::Interrupt { cue, .. } => {
                out.push_str(&format!("== {} ==\n", cue.title()));
            }
            _ => {}
        }
        out.push_str(&render::render_snapshot(
            &self.session.snapshot(),
            self.session.phase().status(),
        ));
        if let Some(notice) = self.notice.take() {
            out.push_str(&format!("! {notice}\n"));
        }
        out
    }
}

impl Default for PracticeDriver {
    fn default() -> Self {
        Self::new()
    }
}
