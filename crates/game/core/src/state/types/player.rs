use std::collections::BTreeSet;

use crate::config::GameConfig;

use super::Position;

/// The hunter: where they stand, what they have seen, and what they carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub(crate) position: Position,
    pub(crate) arrows: u32,
    pub(crate) explored: BTreeSet<Position>,
}

impl Player {
    /// Fresh player standing on the origin with the starting quiver.
    pub fn new() -> Self {
        Self {
            position: Position::ORIGIN,
            arrows: GameConfig::STARTING_ARROWS,
            explored: BTreeSet::from([Position::ORIGIN]),
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Tiles visited so far. Grows monotonically within an episode.
    pub fn explored(&self) -> &BTreeSet<Position> {
        &self.explored
    }

    /// Moves onto `position` and records it as explored.
    ///
    /// Returns `true` when the tile had not been explored before.
    pub(crate) fn step_to(&mut self, position: Position) -> bool {
        self.position = position;
        self.explored.insert(position)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The Wumpus as seen by the rules engine: a fixed den and an alive flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wumpus {
    pub position: Position,
    pub alive: bool,
}

impl Wumpus {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
        }
    }

    /// True when a live Wumpus stands on `position`.
    #[inline]
    pub fn occupies(&self, position: Position) -> bool {
        self.alive && self.position == position
    }

    pub(crate) fn slay(&mut self) {
        self.alive = false;
    }
}
