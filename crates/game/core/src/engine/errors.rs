use crate::action::Input;
use crate::engine::Phase;
use crate::error::{ErrorSeverity, GameError};

/// Why an input was refused.
///
/// A rejected input leaves the session untouched; callers usually just
/// ignore it and keep waiting for the next input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("{input:?} is not accepted while {phase}")]
    NotPermitted { input: Input, phase: Phase },

    #[error("no arrows remaining")]
    NoArrows,

    #[error("the Wumpus is already dead")]
    WumpusDead,

    #[error("session invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Rejection::NotPermitted { .. } | Rejection::NoArrows | Rejection::WumpusDead => {
                ErrorSeverity::Validation
            }
            Rejection::InvariantViolated(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Rejection::NotPermitted { .. } => "ACTION_NOT_PERMITTED",
            Rejection::NoArrows => "ACTION_NO_ARROWS",
            Rejection::WumpusDead => "ACTION_WUMPUS_DEAD",
            Rejection::InvariantViolated(_) => "ACTION_INVARIANT_VIOLATED",
        }
    }
}
