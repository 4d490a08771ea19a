//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use wumpus_core::SessionSnapshot;

use crate::api::RemoteAction;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Confirmed session progress (start, snapshots, aim)
    Session,
    /// Transport failures and refused inputs
    Fault,
}

/// Events published by the session worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new session was created by the authority.
    Started { snapshot: SessionSnapshot },
    /// The authority resolved an action.
    Confirmed {
        action: RemoteAction,
        snapshot: SessionSnapshot,
    },
    AimChanged { aiming: bool },
    /// The confirmed snapshot was resynced from the authority.
    Refreshed { snapshot: SessionSnapshot },
    /// The round-trip failed; the confirmed snapshot was kept.
    TransportFailed {
        action: Option<RemoteAction>,
        message: String,
    },
    /// An input was refused before reaching the authority.
    Rejected { reason: String },
}

impl SessionEvent {
    pub fn topic(&self) -> Topic {
        match self {
            SessionEvent::Started { .. }
            | SessionEvent::Confirmed { .. }
            | SessionEvent::AimChanged { .. }
            | SessionEvent::Refreshed { .. } => Topic::Session,
            SessionEvent::TransportFailed { .. } | SessionEvent::Rejected { .. } => Topic::Fault,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while
/// nobody listens are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

struct Channels {
    session: broadcast::Sender<SessionEvent>,
    fault: broadcast::Sender<SessionEvent>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<SessionEvent> {
        match topic {
            Topic::Session => &self.session,
            Topic::Fault => &self.fault,
        }
    }
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                session: broadcast::channel(capacity).0,
                fault: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: SessionEvent) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.channels.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
