//! Session worker that owns the [`LiveSession`] and talks to the authority.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), performs the
//! authority round-trips, and publishes events to the [`EventBus`]. Commands
//! are handled strictly in order, one at a time.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use wumpus_core::{Direction, SessionSnapshot};

use crate::api::handle::FlightGuard;
use crate::api::{RemoteAction, Result, RuntimeError, SessionAuthority};
use crate::events::{EventBus, SessionEvent};
use crate::live::{CONNECTION_LOST, LiveSession};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Start a fresh session, replacing any current one.
    Start {
        grid_size: u32,
        guard: FlightGuard,
        reply: oneshot::Sender<Result<SessionSnapshot>>,
    },
    /// Submit the verb a directional input maps to.
    Act {
        direction: Direction,
        guard: FlightGuard,
        reply: oneshot::Sender<Result<SessionSnapshot>>,
    },
    /// Fetch the authority's view of the current session.
    Refresh {
        guard: FlightGuard,
        reply: oneshot::Sender<Result<SessionSnapshot>>,
    },
    ToggleAim { reply: oneshot::Sender<Result<bool>> },
    /// Read the current live session (clone).
    Query { reply: oneshot::Sender<LiveSession> },
}

pub struct SessionWorker {
    live: LiveSession,
    authority: Arc<dyn SessionAuthority>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        authority: Arc<dyn SessionAuthority>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            live: LiveSession::new(),
            authority,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!(target: "wumpus_runtime::worker", "Command channel closed, worker exiting");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start {
                grid_size,
                guard,
                reply,
            } => {
                let result = self.handle_start(grid_size).await;
                drop(guard);
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Act {
                direction,
                guard,
                reply,
            } => {
                let result = self.handle_act(direction).await;
                drop(guard);
                if reply.send(result).is_err() {
                    debug!("Act reply channel closed (caller dropped)");
                }
            }
            Command::Refresh { guard, reply } => {
                let result = self.handle_refresh().await;
                drop(guard);
                if reply.send(result).is_err() {
                    debug!("Refresh reply channel closed (caller dropped)");
                }
            }
            Command::ToggleAim { reply } => {
                let result = self.handle_toggle_aim();
                if reply.send(result).is_err() {
                    debug!("ToggleAim reply channel closed (caller dropped)");
                }
            }
            Command::Query { reply } => {
                if reply.send(self.live.clone()).is_err() {
                    debug!("Query reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn handle_start(&mut self, grid_size: u32) -> Result<SessionSnapshot> {
        self.live.begin()?;
        match self.authority.start(grid_size).await {
            Ok(snapshot) => {
                // A new session id replaces the current one outright.
                self.live.confirm(snapshot.clone())?;
                info!(
                    target: "wumpus_runtime::worker",
                    session = %snapshot.session_id,
                    grid_size = snapshot.grid_size,
                    "Session started"
                );
                self.event_bus.publish(SessionEvent::Started {
                    snapshot: snapshot.clone(),
                });
                Ok(snapshot)
            }
            Err(err) => {
                self.live.fail(&err);
                self.publish_failure(None);
                Err(err.into())
            }
        }
    }

    async fn handle_act(&mut self, direction: Direction) -> Result<SessionSnapshot> {
        let action = match self.live.intent_for(direction) {
            Ok(action) => action,
            Err(err) => return Err(self.reject(err)),
        };
        let session_id = match self.live.snapshot() {
            Some(snapshot) => snapshot.session_id.clone(),
            None => return Err(self.reject(RuntimeError::NoSession)),
        };
        self.live.begin()?;

        debug!(target: "wumpus_runtime::worker", session = %session_id, %action, "Submitting");
        match self.authority.submit(&session_id, action).await {
            Ok(snapshot) => {
                if let Err(err) = self.live.confirm(snapshot.clone()) {
                    self.publish_failure(Some(action));
                    return Err(err);
                }
                self.event_bus.publish(SessionEvent::Confirmed {
                    action,
                    snapshot: snapshot.clone(),
                });
                Ok(snapshot)
            }
            Err(err) => {
                self.live.fail(&err);
                self.publish_failure(Some(action));
                Err(err.into())
            }
        }
    }

    async fn handle_refresh(&mut self) -> Result<SessionSnapshot> {
        let session_id = match self.live.snapshot() {
            Some(snapshot) => snapshot.session_id.clone(),
            None => return Err(self.reject(RuntimeError::NoSession)),
        };
        self.live.begin()?;

        match self.authority.status(&session_id).await {
            Ok(snapshot) => {
                if let Err(err) = self.live.confirm(snapshot.clone()) {
                    self.publish_failure(None);
                    return Err(err);
                }
                info!(
                    target: "wumpus_runtime::worker",
                    session = %session_id,
                    turn = snapshot.turn,
                    "Session resynced"
                );
                self.event_bus.publish(SessionEvent::Refreshed {
                    snapshot: snapshot.clone(),
                });
                Ok(snapshot)
            }
            Err(err) => {
                self.live.fail(&err);
                self.publish_failure(None);
                Err(err.into())
            }
        }
    }

    fn handle_toggle_aim(&mut self) -> Result<bool> {
        match self.live.toggle_aim() {
            Ok(aiming) => {
                self.event_bus.publish(SessionEvent::AimChanged { aiming });
                Ok(aiming)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    fn reject(&self, err: RuntimeError) -> RuntimeError {
        debug!(target: "wumpus_runtime::worker", %err, "Input refused");
        self.event_bus.publish(SessionEvent::Rejected {
            reason: err.to_string(),
        });
        err
    }

    fn publish_failure(&self, action: Option<RemoteAction>) {
        let message = self
            .live
            .last_error()
            .unwrap_or(CONNECTION_LOST)
            .to_owned();
        warn!(target: "wumpus_runtime::worker", ?action, %message, "Round-trip failed");
        self.event_bus
            .publish(SessionEvent::TransportFailed { action, message });
    }
}
