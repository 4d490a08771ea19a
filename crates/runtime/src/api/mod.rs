//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration, workers, or infrastructure.

pub mod authority;
pub mod errors;
pub mod handle;

pub use authority::{RemoteAction, SessionAuthority, UnknownVerb};
pub use errors::{Result, RuntimeError, TransportError};
pub use handle::RuntimeHandle;
