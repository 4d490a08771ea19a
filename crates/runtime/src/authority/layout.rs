//! Random layouts for live sessions.

use rand::Rng;
use rand::seq::SliceRandom;

use wumpus_core::{Grid, Layout, LayoutError, Position};

pub const MIN_GRID_SIZE: u32 = 4;
pub const MAX_GRID_SIZE: u32 = 16;
const MIN_PITS: usize = 2;
const MAX_PITS: usize = 8;

/// Grid size actually used for a requested size.
pub fn clamp_grid_size(requested: u32) -> u32 {
    requested.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// One pit per five columns, bounded to `[2, 8]`.
pub fn pit_count(grid_size: u32) -> usize {
    (grid_size as usize / 5).clamp(MIN_PITS, MAX_PITS)
}

/// Places the Wumpus, the gold and the pits on distinct non-origin tiles.
pub fn random_layout<R: Rng + ?Sized>(rng: &mut R, grid_size: u32) -> Result<Layout, LayoutError> {
    let grid = Grid::new(clamp_grid_size(grid_size))?;
    let candidates: Vec<Position> = grid
        .positions()
        .filter(|position| *position != Position::ORIGIN)
        .collect();

    let mut picked = candidates
        .choose_multiple(rng, pit_count(grid.size()) + 2)
        .copied();
    let wumpus = picked.next().unwrap_or(Position::ORIGIN);
    let gold = picked.next().unwrap_or(Position::ORIGIN);

    // Falling back to the origin makes Layout::new report the shortfall.
    Layout::new(grid, picked, wumpus, gold)
}
