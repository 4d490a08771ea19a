//! Per-episode session state.
//!
//! This module owns the data structures that describe one playthrough: the
//! static layout, the player, the Wumpus, turn bookkeeping and the narrative
//! log. Callers read it freely but mutate it exclusively through
//! [`GameEngine`](crate::engine::GameEngine).
pub mod error;
pub mod types;

pub use error::LayoutError;
pub use types::{Grid, HazardKind, Layout, NarrativeLog, Player, Position, SessionId, Wumpus};

use crate::config::GameConfig;
use crate::engine::{Objective, Phase, narrative};
use crate::perception::{CueFlags, Senses, compute_senses};
use crate::snapshot::SessionSnapshot;

/// Where a practice session returns to when a fatal move is acknowledged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revert {
    /// Tile held immediately before the fatal move.
    pub position: Position,
    /// Exploring objective held immediately before the fatal move.
    pub resume: Objective,
}

/// Canonical state of one episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) config: GameConfig,
    pub(crate) layout: Layout,
    pub(crate) wumpus: Wumpus,
    pub(crate) player: Player,
    /// Resolved turns. Never decreases.
    pub(crate) turn: u64,
    pub(crate) phase: Phase,
    /// Cues encountered at least once this episode.
    pub(crate) seen: CueFlags,
    pub(crate) log: NarrativeLog,
    pub(crate) revert: Option<Revert>,
}

impl Session {
    /// Starts an episode on `layout` with the player on the origin.
    pub fn new(id: SessionId, layout: Layout, config: GameConfig) -> Self {
        let phase = Phase::initial(&config);
        let mut log = NarrativeLog::with_capacity(config.log_capacity);
        log.push(narrative::opening(config.mode));

        Self {
            id,
            wumpus: Wumpus::new(layout.wumpus()),
            layout,
            player: Player::new(),
            turn: 0,
            phase,
            seen: CueFlags::empty(),
            log,
            revert: None,
            config,
        }
    }

    /// Offline tutorial session on the fixed practice layout.
    pub fn practice() -> Self {
        Self::new(
            SessionId::practice(),
            Layout::practice(),
            GameConfig::practice(),
        )
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> Grid {
        self.layout.grid()
    }

    pub fn wumpus(&self) -> &Wumpus {
        &self.wumpus
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seen(&self) -> CueFlags {
        self.seen
    }

    pub fn log(&self) -> &NarrativeLog {
        &self.log
    }

    /// Cues on the player's current tile.
    pub fn senses(&self) -> Senses {
        compute_senses(self.player.position, &self.layout, self.wumpus.alive)
    }

    /// Strongly typed view exchanged at action boundaries.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            status: self.phase.status(),
            grid_size: self.grid().size(),
            turn: self.turn,
            player: self.player.position,
            arrows_remaining: self.player.arrows,
            explored: self.player.explored.iter().copied().collect(),
            senses: self.senses(),
            message: self.log.latest().unwrap_or_default().to_owned(),
        }
    }

    /// Checks the structural invariants that must hold after every transition.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        let grid = self.grid();
        if !grid.contains(self.player.position) {
            return Err("player left the grid");
        }
        if !self.player.explored.contains(&self.player.position) {
            return Err("player position missing from explored set");
        }
        if self.player.explored.iter().any(|p| !grid.contains(*p)) {
            return Err("explored tile outside the grid");
        }
        if self.player.arrows > GameConfig::STARTING_ARROWS {
            return Err("arrow count exceeds the starting quiver");
        }
        if matches!(self.phase, Phase::Aiming(_))
            && (self.player.arrows == 0 || !self.wumpus.alive)
        {
            return Err("aiming without an arrow or a target");
        }
        Ok(())
    }

    pub(crate) fn narrate(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    /// Hint for the current exploring objective, used when no cue speaks.
    pub(crate) fn hint(&self, objective: Objective) -> &'static str {
        narrative::hint(objective, self.wumpus.alive)
    }
}
