pub mod common;
pub mod log;
pub mod player;
pub mod world;

// Re-export common types
pub use common::{Position, SessionId};

// Re-export narrative log
pub use log::NarrativeLog;

// Re-export player and Wumpus
pub use player::{Player, Wumpus};

// Re-export world types
pub use world::{Grid, HazardKind, Layout};
