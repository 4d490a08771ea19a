//! Strongly typed session view exchanged with the session authority.
//!
//! The snapshot is exhaustive: every field is always present. Clients never
//! trust an incoming snapshot blindly; [`SessionSnapshot::validate`] checks the
//! structural invariants and [`SessionSnapshot::follows`] checks that a new
//! snapshot is a legal successor of the one it replaces.

use std::collections::BTreeSet;

use crate::error::{ErrorSeverity, GameError};
use crate::perception::Senses;
use crate::state::{Grid, LayoutError, Position, SessionId};

/// Coarse phase label carried by a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Status {
    Onboarding,
    Exploring,
    Aiming,
    Interrupted,
    WumpusKilled,
    Won,
    LostPit,
    LostWumpus,
}

impl Status {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::LostPit | Status::LostWumpus)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: u32, min: u32 },

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: u32, max: u32 },

    #[error("player {player} is outside a {size}x{size} grid")]
    PlayerOutOfBounds { player: Position, size: u32 },

    #[error("player {player} is missing from the explored set")]
    PlayerNotExplored { player: Position },

    #[error("explored tile {position} is outside a {size}x{size} grid")]
    ExploredOutOfBounds { position: Position, size: u32 },

    #[error("{count} explored tiles exceed the grid area {area}")]
    ExploredOverflow { count: usize, area: usize },

    #[error("explored tile {position} is listed twice")]
    DuplicateExplored { position: Position },

    #[error("turn went backwards from {previous} to {current}")]
    TurnRegressed { previous: u64, current: u64 },

    #[error("explored set lost tile {position}")]
    ExploredShrank { position: Position },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GridTooSmall { .. } => "SNAPSHOT_GRID_TOO_SMALL",
            Self::GridTooLarge { .. } => "SNAPSHOT_GRID_TOO_LARGE",
            Self::PlayerOutOfBounds { .. } => "SNAPSHOT_PLAYER_OUT_OF_BOUNDS",
            Self::PlayerNotExplored { .. } => "SNAPSHOT_PLAYER_NOT_EXPLORED",
            Self::ExploredOutOfBounds { .. } => "SNAPSHOT_EXPLORED_OUT_OF_BOUNDS",
            Self::ExploredOverflow { .. } => "SNAPSHOT_EXPLORED_OVERFLOW",
            Self::DuplicateExplored { .. } => "SNAPSHOT_DUPLICATE_EXPLORED",
            Self::TurnRegressed { .. } => "SNAPSHOT_TURN_REGRESSED",
            Self::ExploredShrank { .. } => "SNAPSHOT_EXPLORED_SHRANK",
        }
    }
}

/// Session state as reported at an action boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub status: Status,
    pub grid_size: u32,
    pub turn: u64,
    pub player: Position,
    pub arrows_remaining: u32,
    /// Visited tiles, sorted.
    pub explored: Vec<Position>,
    pub senses: Senses,
    /// Most recent narrative line. Empty when nothing has been said yet.
    pub message: String,
}

impl SessionSnapshot {
    /// Checks the structural invariants of a single snapshot.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let grid = Grid::new(self.grid_size).map_err(|err| match err {
            LayoutError::GridTooLarge { size, max } => SnapshotError::GridTooLarge { size, max },
            _ => SnapshotError::GridTooSmall {
                size: self.grid_size,
                min: Grid::MIN_SIZE,
            },
        })?;

        if !grid.contains(self.player) {
            return Err(SnapshotError::PlayerOutOfBounds {
                player: self.player,
                size: self.grid_size,
            });
        }
        if self.explored.len() > grid.area() {
            return Err(SnapshotError::ExploredOverflow {
                count: self.explored.len(),
                area: grid.area(),
            });
        }

        let mut seen = BTreeSet::new();
        for position in &self.explored {
            if !grid.contains(*position) {
                return Err(SnapshotError::ExploredOutOfBounds {
                    position: *position,
                    size: self.grid_size,
                });
            }
            if !seen.insert(*position) {
                return Err(SnapshotError::DuplicateExplored {
                    position: *position,
                });
            }
        }
        if !seen.contains(&self.player) {
            return Err(SnapshotError::PlayerNotExplored {
                player: self.player,
            });
        }
        Ok(())
    }

    /// Checks that `self` may replace `previous` within the same session.
    ///
    /// Turns never decrease and explored tiles are never forgotten.
    pub fn follows(&self, previous: &SessionSnapshot) -> Result<(), SnapshotError> {
        if self.turn < previous.turn {
            return Err(SnapshotError::TurnRegressed {
                previous: previous.turn,
                current: self.turn,
            });
        }
        let current: BTreeSet<Position> = self.explored.iter().copied().collect();
        if let Some(lost) = previous.explored.iter().find(|p| !current.contains(p)) {
            return Err(SnapshotError::ExploredShrank { position: *lost });
        }
        Ok(())
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            session_id: SessionId::new("abc"),
            status: Status::Exploring,
            grid_size: 4,
            turn: 2,
            player: Position::new(1, 0),
            arrows_remaining: 1,
            explored: vec![Position::new(0, 0), Position::new(1, 0)],
            senses: Senses::NONE,
            message: String::new(),
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert_eq!(snapshot().validate(), Ok(()));
    }

    #[test]
    fn rejects_structural_violations() {
        let mut tiny = snapshot();
        tiny.grid_size = 1;
        assert!(matches!(
            tiny.validate(),
            Err(SnapshotError::GridTooSmall { .. })
        ));

        let mut huge = snapshot();
        huge.grid_size = 100;
        let err = huge.validate().unwrap_err();
        assert_eq!(
            err,
            SnapshotError::GridTooLarge {
                size: 100,
                max: Grid::MAX_SIZE
            }
        );
        assert_eq!(err.error_code(), "SNAPSHOT_GRID_TOO_LARGE");

        let mut outside = snapshot();
        outside.player = Position::new(4, 0);
        assert!(matches!(
            outside.validate(),
            Err(SnapshotError::PlayerOutOfBounds { .. })
        ));

        let mut unexplored = snapshot();
        unexplored.player = Position::new(2, 0);
        assert!(matches!(
            unexplored.validate(),
            Err(SnapshotError::PlayerNotExplored { .. })
        ));

        let mut doubled = snapshot();
        doubled.explored.push(Position::new(1, 0));
        assert!(matches!(
            doubled.validate(),
            Err(SnapshotError::DuplicateExplored { .. })
        ));
    }

    #[test]
    fn successor_must_not_regress() {
        let previous = snapshot();

        let mut rewound = snapshot();
        rewound.turn = 1;
        assert!(matches!(
            rewound.follows(&previous),
            Err(SnapshotError::TurnRegressed { .. })
        ));

        let mut forgetful = snapshot();
        forgetful.turn = 3;
        forgetful.explored = vec![Position::new(1, 0)];
        assert_eq!(
            forgetful.follows(&previous),
            Err(SnapshotError::ExploredShrank {
                position: Position::ORIGIN
            })
        );

        let mut next = snapshot();
        next.turn = 3;
        next.player = Position::new(2, 0);
        next.explored.push(Position::new(2, 0));
        assert_eq!(next.follows(&previous), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_contract_uses_wire_labels() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["status"], "EXPLORING");
        assert_eq!(json["session_id"], "abc");
        assert_eq!(json["player"]["x"], 1);

        let back: SessionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_fields_are_rejected() {
        let mut json = serde_json::to_value(snapshot()).unwrap();
        json["wumpus"] = serde_json::json!({ "x": 3, "y": 3 });
        assert!(serde_json::from_value::<SessionSnapshot>(json).is_err());
    }
}
