//! Typed player inputs and the transitions that resolve them.
//!
//! Input devices never touch the engine directly: key bindings, gamepads and
//! network verbs are all mapped onto [`Input`] first. Each input variant has a
//! transition type implementing [`ActionTransition`] that the engine drives.
//!
//! # Module Structure
//!
//! - `movement`: directions, boundary clamping and the move transition
//! - `combat`: arrow ray casting and the shoot transition
//! - `aim`: entering and leaving aim mode
//! - `acknowledge`: dismissing popups, interrupts and outcomes

mod acknowledge;
mod aim;
pub mod combat;
pub mod movement;

pub use acknowledge::AcknowledgeAction;
pub use aim::ToggleAimAction;
pub use combat::{Shot, ShootAction, resolve_shot};
pub use movement::{Direction, MoveAction, resolve_move};

use crate::engine::{Rejection, StepEvent};
use crate::state::Session;

/// A single player intent, independent of the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    Move(Direction),
    /// Fire the single arrow. Only accepted while aiming.
    Shoot(Direction),
    ToggleAim,
    Acknowledge,
}

impl Input {
    /// Directional input routed by the current aim state.
    pub const fn directional(direction: Direction, aiming: bool) -> Self {
        if aiming {
            Input::Shoot(direction)
        } else {
            Input::Move(direction)
        }
    }
}

/// Defines how a concrete input mutates session state.
///
/// `pre_validate` sees the session **before** mutation and decides whether the
/// current phase permits the input. `apply` may assume validation passed; the
/// engine runs it on a working copy and discards the copy if the session
/// invariants no longer hold afterwards.
pub trait ActionTransition {
    /// Rejects inputs the current phase does not accept.
    fn pre_validate(&self, session: &Session) -> Result<(), Rejection>;

    /// Applies the input and reports what happened.
    fn apply(&self, session: &mut Session) -> StepEvent;
}
