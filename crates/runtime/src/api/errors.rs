//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the session authority and snapshot
//! validation so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use wumpus_core::{ErrorSeverity, GameError, SnapshotError, Status};

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failure talking to the session authority.
///
/// The live session is left untouched whenever one of these is returned, so
/// the same intent can be submitted again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The authority could not be reached or did not answer.
    #[error("session authority unavailable: {0}")]
    Unavailable(String),

    /// The authority answered but refused the request.
    #[error("session authority refused the request: {0}")]
    Refused(String),

    /// The authority answered with something that is not a valid snapshot.
    #[error("malformed response from session authority: {0}")]
    Malformed(String),
}

impl GameError for TransportError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TransportError::Unavailable(_) => ErrorSeverity::Recoverable,
            TransportError::Refused(_) => ErrorSeverity::Validation,
            TransportError::Malformed(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TransportError::Unavailable(_) => "TRANSPORT_UNAVAILABLE",
            TransportError::Refused(_) => "TRANSPORT_REFUSED",
            TransportError::Malformed(_) => "TRANSPORT_MALFORMED",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("an action is already being resolved")]
    ActionInFlight,

    #[error("no live session; start one first")]
    NoSession,

    #[error("{action} is not available while {status}")]
    NotAvailable { action: &'static str, status: Status },

    #[error("no arrows remaining")]
    NoArrows,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("authority sent an invalid snapshot")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// True when the same intent may simply be tried again.
    pub fn is_retryable(&self) -> bool {
        match self {
            RuntimeError::ActionInFlight => true,
            RuntimeError::Transport(err) => err.severity().is_recoverable(),
            _ => false,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::ActionInFlight => ErrorSeverity::Recoverable,
            RuntimeError::NoSession
            | RuntimeError::NotAvailable { .. }
            | RuntimeError::NoArrows => ErrorSeverity::Validation,
            RuntimeError::Transport(err) => err.severity(),
            RuntimeError::InvalidSnapshot(err) => err.severity(),
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::ActionInFlight => "RUNTIME_ACTION_IN_FLIGHT",
            RuntimeError::NoSession => "RUNTIME_NO_SESSION",
            RuntimeError::NotAvailable { .. } => "RUNTIME_NOT_AVAILABLE",
            RuntimeError::NoArrows => "RUNTIME_NO_ARROWS",
            RuntimeError::Transport(err) => err.error_code(),
            RuntimeError::InvalidSnapshot(err) => err.error_code(),
            RuntimeError::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            RuntimeError::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            RuntimeError::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}
