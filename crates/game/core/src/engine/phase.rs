//! Named states of the episode state machine.

use crate::config::{GameConfig, Mode};
use crate::perception::Cue;
use crate::snapshot::Status;

/// Onboarding popups shown before a practice session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum OnboardingStep {
    Welcome,
    Controls,
}

/// What the hunter is currently working toward while exploring.
///
/// The objective never gates an action; it selects the hint text and the
/// phase resumed after an interrupt or a practice revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Objective {
    /// Map the dungeon and read the cues.
    Survey,
    /// The Wumpus has been smelled; line up a shot.
    Hunt,
    /// Head for the gold.
    Treasure,
}

impl Objective {
    /// Fixed lookup for the objective resumed after acknowledging `cue`.
    pub const fn after_interrupt(cue: Cue, interrupted: Objective) -> Objective {
        match cue {
            Cue::Breeze => interrupted,
            Cue::Stench => Objective::Hunt,
            Cue::Shine => Objective::Treasure,
        }
    }
}

/// Current named state of the episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// Practice-only popups preceding the first move.
    Onboarding(OnboardingStep),
    Exploring(Objective),
    /// Directional input fires the arrow instead of moving.
    Aiming(Objective),
    /// One-shot lesson for a cue sensed for the first time.
    Interrupt { cue: Cue, resume: Objective },
    WumpusKilled,
    Won,
    LostPit,
    LostWumpus,
}

impl Phase {
    /// Phase a fresh session starts in.
    pub fn initial(config: &GameConfig) -> Self {
        if config.onboarding && config.mode == Mode::Practice {
            Phase::Onboarding(OnboardingStep::Welcome)
        } else {
            Phase::Exploring(Objective::Survey)
        }
    }

    /// Won and lost phases.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::LostPit | Phase::LostWumpus)
    }

    pub const fn is_exploring(self) -> bool {
        matches!(self, Phase::Exploring(_))
    }

    pub const fn is_aiming(self) -> bool {
        matches!(self, Phase::Aiming(_))
    }

    /// Phases that only an acknowledge input leaves.
    pub const fn awaits_acknowledgement(self) -> bool {
        !matches!(self, Phase::Exploring(_) | Phase::Aiming(_))
    }

    /// Objective of the exploring or aiming state, if any.
    pub const fn objective(self) -> Option<Objective> {
        match self {
            Phase::Exploring(objective) | Phase::Aiming(objective) => Some(objective),
            _ => None,
        }
    }

    /// Coarse status carried by the session snapshot.
    pub const fn status(self) -> Status {
        match self {
            Phase::Onboarding(_) => Status::Onboarding,
            Phase::Exploring(_) => Status::Exploring,
            Phase::Aiming(_) => Status::Aiming,
            Phase::Interrupt { .. } => Status::Interrupted,
            Phase::WumpusKilled => Status::WumpusKilled,
            Phase::Won => Status::Won,
            Phase::LostPit => Status::LostPit,
            Phase::LostWumpus => Status::LostWumpus,
        }
    }
}

/// Instruction for the host application once a phase hands control back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Handoff {
    /// Practice finished: leave the tutorial and start the real game.
    ExitPractice,
    /// Live game won: offer another round.
    OfferReplay,
    /// Live game lost: the session must be discarded and restarted.
    RequireReset,
}
