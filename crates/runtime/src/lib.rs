//! Runtime orchestration for live Hunt the Wumpus sessions.
//!
//! This crate wires together the session authority abstraction, the client-side
//! live session reducer and a worker task into a cohesive runtime API.
//! Consumers embed [`Runtime`] to drive a session, subscribe to events, and
//! query the last confirmed snapshot through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`live`] mirrors the authoritative session on the client side
//! - [`events`] provides the topic-based event bus
//! - [`authority`] is the in-process reference authority
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod authority;
pub mod events;
pub mod live;
pub mod runtime;

mod workers;

pub use api::{
    RemoteAction, Result, RuntimeError, RuntimeHandle, SessionAuthority, TransportError,
    UnknownVerb,
};
pub use authority::LocalAuthority;
pub use events::{EventBus, SessionEvent, Topic};
pub use live::{CONNECTION_LOST, LiveSession};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
