//! Client-side mirror of an authoritative session.
//!
//! [`LiveSession`] never evaluates rules itself. It keeps the last snapshot the
//! authority confirmed, the local aim toggle and the in-flight flag, and it
//! decides which verb a directional input turns into. Everything it accepts
//! from the authority is validated first.
use tracing::{debug, warn};

use wumpus_core::{Direction, SessionSnapshot, Status};

use crate::api::{RemoteAction, Result, RuntimeError, TransportError};

/// User-visible text recorded when the authority could not be reached.
pub const CONNECTION_LOST: &str = "Connection lost. Try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSession {
    snapshot: Option<SessionSnapshot>,
    aiming: bool,
    in_flight: bool,
    last_error: Option<String>,
}

impl LiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last confirmed snapshot, if a session was started.
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Message describing the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Confirmed status with the local aim toggle layered on top.
    pub fn phase(&self) -> Option<Status> {
        let status = self.snapshot.as_ref()?.status;
        Some(if self.aiming && Self::accepts_actions(status) {
            Status::Aiming
        } else {
            status
        })
    }

    /// Marks a request as outstanding. Overlapping requests are refused.
    pub fn begin(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(RuntimeError::ActionInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Accepts a snapshot from the authority.
    ///
    /// A snapshot for the session already held must be a legal successor of
    /// the current one. A snapshot for a different session id replaces it
    /// outright. Rejected snapshots leave the confirmed state untouched.
    pub fn confirm(&mut self, snapshot: SessionSnapshot) -> Result<()> {
        self.in_flight = false;

        let checked = snapshot.validate().and_then(|()| match &self.snapshot {
            Some(current) if current.session_id == snapshot.session_id => {
                snapshot.follows(current)
            }
            _ => Ok(()),
        });
        if let Err(err) = checked {
            warn!(target: "wumpus_runtime::live", %err, "Discarding invalid snapshot");
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        debug!(
            target: "wumpus_runtime::live",
            session = %snapshot.session_id,
            status = %snapshot.status,
            turn = snapshot.turn,
            "Snapshot confirmed"
        );
        // Moves are only sent while not aiming and any shot closes aim.
        self.aiming = false;
        self.last_error = None;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Records a failed round-trip. The confirmed snapshot and aim are kept so
    /// the same intent can be retried.
    pub fn fail(&mut self, error: &TransportError) {
        warn!(target: "wumpus_runtime::live", %error, "Round-trip failed");
        self.in_flight = false;
        self.last_error = Some(match error {
            TransportError::Unavailable(_) => CONNECTION_LOST.to_owned(),
            other => other.to_string(),
        });
    }

    /// Flips the local aim flag and returns the new value.
    ///
    /// Entering aim needs an arrow. With a single arrow that also proves the
    /// Wumpus is still alive, since only a shot can kill it.
    pub fn toggle_aim(&mut self) -> Result<bool> {
        let snapshot = self.snapshot.as_ref().ok_or(RuntimeError::NoSession)?;
        if self.in_flight {
            return Err(RuntimeError::ActionInFlight);
        }
        if self.aiming {
            self.aiming = false;
            return Ok(false);
        }
        if !Self::accepts_actions(snapshot.status) {
            return Err(RuntimeError::NotAvailable {
                action: "aim",
                status: snapshot.status,
            });
        }
        if snapshot.arrows_remaining == 0 {
            return Err(RuntimeError::NoArrows);
        }
        self.aiming = true;
        Ok(true)
    }

    /// Verb a directional input maps to in the current state.
    pub fn intent_for(&self, direction: Direction) -> Result<RemoteAction> {
        let snapshot = self.snapshot.as_ref().ok_or(RuntimeError::NoSession)?;
        if !Self::accepts_actions(snapshot.status) {
            return Err(RuntimeError::NotAvailable {
                action: if self.aiming { "shoot" } else { "move" },
                status: snapshot.status,
            });
        }
        Ok(if self.aiming {
            RemoteAction::Shoot(direction)
        } else {
            RemoteAction::Move(direction)
        })
    }

    // The kill popup is informational; play continues after it.
    fn accepts_actions(status: Status) -> bool {
        matches!(status, Status::Exploring | Status::WumpusKilled)
    }
}
