//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a live session.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError, RuntimeHandle, SessionAuthority};
use crate::authority::LocalAuthority;
use crate::events::EventBus;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Board size requested from the authority on start and reset.
    pub grid_size: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_GRID_SIZE: u32 = 10;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates a live session
///
/// Design: Runtime owns the worker and coordinates its lifetime.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker exits once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    authority: Option<Arc<dyn SessionAuthority>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            authority: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the session authority.
    ///
    /// Defaults to an in-process [`LocalAuthority`] when not provided.
    pub fn authority(mut self, authority: impl SessionAuthority + 'static) -> Self {
        self.authority = Some(Arc::new(authority));
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> Runtime {
        let authority = self
            .authority
            .unwrap_or_else(|| Arc::new(LocalAuthority::new()));

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), self.config.grid_size);
        let worker = SessionWorker::new(authority, command_rx, event_bus);

        tracing::debug!(
            target: "wumpus_runtime",
            grid_size = self.config.grid_size,
            command_buffer = self.config.command_buffer_size,
            event_buffer = self.config.event_buffer_size,
            "Spawning session worker"
        );
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Runtime {
            handle,
            worker_handle,
        }
    }
}
