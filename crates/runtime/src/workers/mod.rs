//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the live session and performs every authority
//! round-trip, so the session state is never shared between tasks.

mod session;

pub use session::{Command, SessionWorker};
