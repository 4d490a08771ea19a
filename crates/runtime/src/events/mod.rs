//! Topic-based event bus for runtime events.
//!
//! Session progress and faults are published to separate topics so a renderer
//! can follow confirmed snapshots while a status line only listens for faults.

mod bus;

pub use bus::{EventBus, SessionEvent, Topic};
