//! Layout construction errors.
//!
//! Raised when a dungeon layout handed to the engine is not playable.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{HazardKind, Position};

/// Errors that occur while building a [`Layout`](crate::state::Layout).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    /// Grid is smaller than the minimum playable size.
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: u32, min: u32 },

    /// Grid exceeds the maximum supported size.
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: u32, max: u32 },

    /// A hazard lies outside the grid.
    #[error("{kind} at {position} is outside a {size}x{size} grid")]
    OutOfBounds {
        kind: HazardKind,
        position: Position,
        size: u32,
    },

    /// A hazard occupies the player's starting tile.
    #[error("{kind} may not be placed on the starting tile")]
    OnOrigin { kind: HazardKind },

    /// Two hazards share the same tile.
    #[error("{first} and {second} overlap at {position}")]
    Overlap {
        first: HazardKind,
        second: HazardKind,
        position: Position,
    },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use LayoutError::*;
        match self {
            GridTooSmall { .. } => "LAYOUT_GRID_TOO_SMALL",
            GridTooLarge { .. } => "LAYOUT_GRID_TOO_LARGE",
            OutOfBounds { .. } => "LAYOUT_OUT_OF_BOUNDS",
            OnOrigin { .. } => "LAYOUT_ON_ORIGIN",
            Overlap { .. } => "LAYOUT_OVERLAP",
        }
    }
}
