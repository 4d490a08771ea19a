//! Contract with the source of truth for live sessions.
//!
//! The live game is owned by a session authority: it generates the layout,
//! evaluates every action and answers with a [`SessionSnapshot`]. The runtime
//! only ever sees that opaque request/response surface, so an HTTP backend, a
//! test double and the in-process [`LocalAuthority`](crate::LocalAuthority)
//! are interchangeable.
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wumpus_core::{Direction, Input, SessionId, SessionSnapshot};

use super::errors::TransportError;

/// Action verb understood by the session authority.
///
/// Encoded on the wire as `"NORTH"` for moves and `"SHOOT_NORTH"` for shots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RemoteAction {
    Move(Direction),
    Shoot(Direction),
}

impl RemoteAction {
    const SHOOT_PREFIX: &'static str = "SHOOT_";

    pub fn direction(self) -> Direction {
        match self {
            RemoteAction::Move(direction) | RemoteAction::Shoot(direction) => direction,
        }
    }

    pub fn is_shot(self) -> bool {
        matches!(self, RemoteAction::Shoot(_))
    }

    /// Engine input the authority evaluates for this verb.
    pub fn input(self) -> Input {
        match self {
            RemoteAction::Move(direction) => Input::Move(direction),
            RemoteAction::Shoot(direction) => Input::Shoot(direction),
        }
    }
}

impl fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteAction::Move(direction) => write!(f, "{direction}"),
            RemoteAction::Shoot(direction) => write!(f, "{}{direction}", Self::SHOOT_PREFIX),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown action verb `{0}`")]
pub struct UnknownVerb(pub String);

impl FromStr for RemoteAction {
    type Err = UnknownVerb;

    fn from_str(verb: &str) -> Result<Self, Self::Err> {
        let parse = |label: &str| {
            Direction::from_str(label).map_err(|_| UnknownVerb(verb.to_owned()))
        };
        match verb.strip_prefix(Self::SHOOT_PREFIX) {
            Some(label) => parse(label).map(RemoteAction::Shoot),
            None => parse(verb).map(RemoteAction::Move),
        }
    }
}

impl From<RemoteAction> for String {
    fn from(action: RemoteAction) -> Self {
        action.to_string()
    }
}

impl TryFrom<String> for RemoteAction {
    type Error = UnknownVerb;

    fn try_from(verb: String) -> Result<Self, Self::Error> {
        verb.parse()
    }
}

/// Source of truth for live sessions.
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    /// Creates a new session on a `grid_size` board and returns its first snapshot.
    async fn start(&self, grid_size: u32) -> Result<SessionSnapshot, TransportError>;

    /// Evaluates one action and returns the resulting snapshot.
    async fn submit(
        &self,
        session_id: &SessionId,
        action: RemoteAction,
    ) -> Result<SessionSnapshot, TransportError>;

    /// Current snapshot of a session without acting on it.
    ///
    /// Used to resync after a round-trip whose outcome is unknown.
    async fn status(&self, session_id: &SessionId) -> Result<SessionSnapshot, TransportError>;
}
