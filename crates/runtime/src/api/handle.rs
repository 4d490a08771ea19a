//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the live session or streaming events from specific topics.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{broadcast, mpsc, oneshot};

use wumpus_core::{Direction, SessionSnapshot};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, SessionEvent, Topic};
use crate::live::LiveSession;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    in_flight: Arc<AtomicBool>,
    grid_size: u32,
}

/// Holds the shared in-flight flag for one round-trip.
///
/// The guard travels inside the command, so the flag stays set until the
/// worker has finished with the authority even if the caller gives up.
pub(crate) struct FlightGuard(Arc<AtomicBool>);

impl FlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RuntimeError::ActionInFlight)?;
        Ok(Self(Arc::clone(flag)))
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus, grid_size: u32) -> Self {
        Self {
            command_tx,
            event_bus,
            in_flight: Arc::new(AtomicBool::new(false)),
            grid_size,
        }
    }

    /// Starts a new session on the configured grid size.
    pub async fn start(&self) -> Result<SessionSnapshot> {
        self.start_with(self.grid_size).await
    }

    /// Starts a new session on a `grid_size` board.
    pub async fn start_with(&self, grid_size: u32) -> Result<SessionSnapshot> {
        let guard = FlightGuard::acquire(&self.in_flight)?;
        self.request(|reply| Command::Start {
            grid_size,
            guard,
            reply,
        })
        .await?
    }

    /// Discards the current session and starts a fresh one.
    pub async fn reset(&self) -> Result<SessionSnapshot> {
        tracing::info!(target: "wumpus_runtime::handle", "Resetting live session");
        self.start().await
    }

    /// Sends a directional input: a move, or a shot while aiming.
    ///
    /// Fails with [`RuntimeError::ActionInFlight`] while another action is
    /// still being resolved by the authority. Overlapping actions are never
    /// queued.
    pub async fn act(&self, direction: Direction) -> Result<SessionSnapshot> {
        let guard = FlightGuard::acquire(&self.in_flight)?;
        self.request(|reply| Command::Act {
            direction,
            guard,
            reply,
        })
        .await?
    }

    /// Re-reads the current session from the authority and confirms it.
    ///
    /// Recovers from a failed round-trip whose action may still have been
    /// applied remotely, where retrying the intent could apply it twice.
    pub async fn refresh(&self) -> Result<SessionSnapshot> {
        let guard = FlightGuard::acquire(&self.in_flight)?;
        self.request(|reply| Command::Refresh { guard, reply })
            .await?
    }

    /// Flips aim mode locally. Returns the new aim state.
    pub async fn toggle_aim(&self) -> Result<bool> {
        if self.in_flight.load(Ordering::Acquire) {
            return Err(RuntimeError::ActionInFlight);
        }
        self.request(|reply| Command::ToggleAim { reply }).await?
    }

    /// Query the current live session (read-only copy)
    pub async fn query(&self) -> Result<LiveSession> {
        self.request(|reply| Command::Query { reply }).await
    }

    /// True while a start, action or refresh is outstanding at the authority.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - session started, snapshots confirmed, aim changes
    /// - `Topic::Fault` - transport failures and refused inputs
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
