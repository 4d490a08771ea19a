//! Deterministic Hunt the Wumpus rules shared by every client.
//!
//! `wumpus-core` defines the canonical rules (perception, movement, arrow
//! combat, the phase state machine) and exposes pure APIs that are reused by
//! the offline practice mode and by the reference session authority. All
//! session mutation flows through [`engine::GameEngine`]; supporting crates
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod perception;
pub mod snapshot;
pub mod state;

pub use action::{
    AcknowledgeAction, ActionTransition, Direction, Input, MoveAction, ShootAction, Shot,
    ToggleAimAction, resolve_move, resolve_shot,
};
pub use config::{GameConfig, Mode};
pub use engine::{
    GameEngine, Handoff, Objective, OnboardingStep, Phase, Rejection, Step, StepEvent,
};
pub use error::{ErrorSeverity, GameError};
pub use perception::{Cue, CueFlags, Senses, compute_senses};
pub use snapshot::{SessionSnapshot, SnapshotError, Status};
pub use state::{
    Grid, HazardKind, Layout, LayoutError, NarrativeLog, Player, Position, Session,
    SessionId, Wumpus,
};
