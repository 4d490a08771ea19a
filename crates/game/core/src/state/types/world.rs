use std::collections::BTreeSet;

use crate::state::LayoutError;

use super::Position;

/// Square dungeon of `size x size` tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: u32,
}

impl Grid {
    pub const MIN_SIZE: u32 = 2;
    pub const MAX_SIZE: u32 = 64;

    pub fn new(size: u32) -> Result<Self, LayoutError> {
        if size < Self::MIN_SIZE {
            return Err(LayoutError::GridTooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(LayoutError::GridTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    #[inline]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Number of tiles on the grid.
    #[inline]
    pub const fn area(self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    #[inline]
    pub fn contains(self, position: Position) -> bool {
        let limit = self.size as i32;
        (0..limit).contains(&position.x) && (0..limit).contains(&position.y)
    }

    /// Clamps each axis of `position` into `[0, size - 1]`.
    #[inline]
    pub fn clamp(self, position: Position) -> Position {
        let max = self.size as i32 - 1;
        Position::new(position.x.clamp(0, max), position.y.clamp(0, max))
    }

    /// All tiles in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let limit = self.size as i32;
        (0..limit).flat_map(move |y| (0..limit).map(move |x| Position::new(x, y)))
    }
}

/// Kind of static placement on a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HazardKind {
    Pit,
    Wumpus,
    Gold,
}

/// Static per-episode layout: grid dimensions and hazard placements.
///
/// Everything here is fixed for the lifetime of a session. The Wumpus's
/// alive flag lives on the session, not on the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    pits: BTreeSet<Position>,
    wumpus: Position,
    gold: Position,
}

impl Layout {
    /// Builds and validates a layout.
    ///
    /// Every hazard must lie inside the grid, away from the starting tile, and
    /// on a tile of its own.
    pub fn new(
        grid: Grid,
        pits: impl IntoIterator<Item = Position>,
        wumpus: Position,
        gold: Position,
    ) -> Result<Self, LayoutError> {
        let check = |kind: HazardKind, position: Position| {
            if !grid.contains(position) {
                return Err(LayoutError::OutOfBounds {
                    kind,
                    position,
                    size: grid.size(),
                });
            }
            if position == Position::ORIGIN {
                return Err(LayoutError::OnOrigin { kind });
            }
            Ok(())
        };

        check(HazardKind::Wumpus, wumpus)?;
        check(HazardKind::Gold, gold)?;
        if wumpus == gold {
            return Err(LayoutError::Overlap {
                first: HazardKind::Wumpus,
                second: HazardKind::Gold,
                position: gold,
            });
        }

        let mut placed = BTreeSet::new();
        for pit in pits {
            check(HazardKind::Pit, pit)?;
            let clash = if pit == wumpus {
                Some(HazardKind::Wumpus)
            } else if pit == gold {
                Some(HazardKind::Gold)
            } else if placed.contains(&pit) {
                Some(HazardKind::Pit)
            } else {
                None
            };
            if let Some(second) = clash {
                return Err(LayoutError::Overlap {
                    first: HazardKind::Pit,
                    second,
                    position: pit,
                });
            }
            placed.insert(pit);
        }

        Ok(Self {
            grid,
            pits: placed,
            wumpus,
            gold,
        })
    }

    /// Fixed 10x10 dungeon used by the practice mode.
    pub fn practice() -> Self {
        Self {
            grid: Grid { size: 10 },
            pits: BTreeSet::from([
                Position::new(3, 2),
                Position::new(6, 1),
                Position::new(8, 4),
                Position::new(2, 7),
                Position::new(7, 7),
            ]),
            wumpus: Position::new(6, 5),
            gold: Position::new(4, 8),
        }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn pits(&self) -> &BTreeSet<Position> {
        &self.pits
    }

    /// Starting tile of the Wumpus. It never moves within this engine.
    #[inline]
    pub fn wumpus(&self) -> Position {
        self.wumpus
    }

    #[inline]
    pub fn gold(&self) -> Position {
        self.gold
    }

    #[inline]
    pub fn is_pit(&self, position: Position) -> bool {
        self.pits.contains(&position)
    }
}
