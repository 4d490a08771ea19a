//! Terminal client for Hunt the Wumpus.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment)
//!   ├─→ logging (file-only tracing)
//!   └─→ App
//!         ├─→ PracticeDriver (core engine, offline tutorial)
//!         └─→ LiveDriver (RuntimeHandle, authoritative session)
//! ```
//!
//! The drivers only see [`input::KeyAction`] values and produce plain text
//! through [`render`], so the whole client can be exercised with in-memory
//! readers and writers.
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use app::{App, Flow, LiveDriver, PracticeDriver};
pub use config::ClientConfig;
