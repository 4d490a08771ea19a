//! Sensory cues derived from the static layout.
//!
//! Cues are recomputed from scratch for a position; nothing here reads or
//! writes session state, so they can be evaluated at any time.

use bitflags::bitflags;

use crate::state::{Layout, Position};

/// A sensory signal emitted by a nearby hazard or the gold.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cue {
    Breeze,
    Stench,
    Shine,
}

impl Cue {
    /// Order in which newly sensed cues claim the one-shot interrupt.
    pub const PRIORITY: [Cue; 3] = [Cue::Breeze, Cue::Stench, Cue::Shine];

    pub const fn flag(self) -> CueFlags {
        match self {
            Cue::Breeze => CueFlags::BREEZE,
            Cue::Stench => CueFlags::STENCH,
            Cue::Shine => CueFlags::SHINE,
        }
    }

    /// Headline shown when the cue is sensed for the first time.
    pub const fn title(self) -> &'static str {
        match self {
            Cue::Breeze => "You Feel a Cold Draft",
            Cue::Stench => "Something Foul Lurks Nearby",
            Cue::Shine => "A Golden Glimmer",
        }
    }
}

bitflags! {
    /// Set of cues, used to remember which ones were already encountered.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CueFlags: u8 {
        const BREEZE = 1;
        const STENCH = 1 << 1;
        const SHINE = 1 << 2;
    }
}

/// Cues active on a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Senses {
    pub breeze: bool,
    pub stench: bool,
    pub shine: bool,
}

impl Senses {
    pub const NONE: Self = Self {
        breeze: false,
        stench: false,
        shine: false,
    };

    pub const fn is_active(self, cue: Cue) -> bool {
        match cue {
            Cue::Breeze => self.breeze,
            Cue::Stench => self.stench,
            Cue::Shine => self.shine,
        }
    }

    pub fn flags(self) -> CueFlags {
        Cue::PRIORITY
            .into_iter()
            .filter(|cue| self.is_active(*cue))
            .fold(CueFlags::empty(), |acc, cue| acc | cue.flag())
    }
}

/// Computes the cues sensed on `position`.
///
/// - breeze: a pit is edge-adjacent
/// - stench: the Wumpus is alive and edge-adjacent
/// - shine: the gold is edge-adjacent or underfoot
pub fn compute_senses(position: Position, layout: &Layout, wumpus_alive: bool) -> Senses {
    Senses {
        breeze: layout.pits().iter().any(|pit| position.is_adjacent(*pit)),
        stench: wumpus_alive && position.is_adjacent(layout.wumpus()),
        shine: position.manhattan(layout.gold()) <= 1,
    }
}
