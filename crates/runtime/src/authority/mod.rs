//! Reference session authority evaluated in-process.
//!
//! Used for offline live play and as the parity baseline for remote
//! authorities: whatever the remote evaluator answers must match what the core
//! engine computes here.
pub mod layout;
mod local;

pub use layout::{MAX_GRID_SIZE, MIN_GRID_SIZE, clamp_grid_size, pit_count, random_layout};
pub use local::LocalAuthority;
