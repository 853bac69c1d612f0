//! Editing session tying the grid to its derived rectangles and decals

use log::trace;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::algorithm::combiner::{CombineConfig, RectangleCombiner};
use crate::algorithm::decals::DecalSet;
use crate::spatial::{OccupancyGrid, TileRectangle};

/// Owns an occupancy grid together with everything derived from it
///
/// Every edit mutates the grid, recombines the rectangles and rebuilds the
/// decals before returning, so the three are never observed out of step.
/// Hosts that share an editor across threads should guard the whole editor
/// with a single lock.
#[derive(Debug)]
pub struct TileEditor<R = StdRng> {
    grid: OccupancyGrid,
    combiner: RectangleCombiner,
    rectangles: Vec<TileRectangle>,
    decals: DecalSet,
    rng: R,
}

impl TileEditor<ThreadRng> {
    /// Start a session drawing randomness from the thread-local generator
    pub fn new(grid: OccupancyGrid, config: CombineConfig) -> Self {
        Self::with_rng(grid, config, rand::rng())
    }
}

impl TileEditor<StdRng> {
    /// Start a reproducible session from a fixed seed
    pub fn seeded(grid: OccupancyGrid, config: CombineConfig, seed: u64) -> Self {
        Self::with_rng(grid, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TileEditor<R> {
    /// Start a session with a caller-supplied random source
    ///
    /// Rectangles and decals are derived immediately.
    pub fn with_rng(grid: OccupancyGrid, config: CombineConfig, rng: R) -> Self {
        let mut editor = Self {
            grid,
            combiner: RectangleCombiner::new(config),
            rectangles: Vec::new(),
            decals: DecalSet::new(),
            rng,
        };
        editor.refresh();
        editor
    }

    /// Set a cell and re-derive rectangles and decals
    ///
    /// Out-of-bounds edits leave the grid untouched but still re-derive.
    /// Returns whether the cell changed state.
    pub fn set_occupied(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        let changed = self.grid.in_bounds(x, y) && self.grid.get(x, y) != occupied;
        self.grid.set(x, y, occupied);
        trace!("edit ({x}, {y}) -> {occupied}, changed: {changed}");

        self.refresh();
        changed
    }

    /// Place a tile and re-derive
    pub fn add_tile(&mut self, x: i32, y: i32) -> bool {
        self.set_occupied(x, y, true)
    }

    /// Remove a tile and re-derive
    pub fn remove_tile(&mut self, x: i32, y: i32) -> bool {
        self.set_occupied(x, y, false)
    }

    /// Edit the cell under a pixel position
    ///
    /// Returns the edited cell, or `None` when the position is off the grid
    /// (in which case nothing is re-derived).
    pub fn edit_at_pixel(&mut self, px: i32, py: i32, occupied: bool) -> Option<(usize, usize)> {
        let (x, y) = self.grid.cell_at_pixel(px, py)?;
        self.set_occupied(x as i32, y as i32, occupied);
        Some((x, y))
    }

    /// Recombine rectangles and rebuild decals from the current grid
    pub fn refresh(&mut self) {
        self.rectangles = self.combiner.combine_with(&self.grid, &mut self.rng);
        self.decals.rebuild(&self.grid, &mut self.rng);
    }

    /// Drop the decals attached to one cell without a full rebuild
    pub fn remove_decals_at(&mut self, x: usize, y: usize) -> usize {
        self.decals.remove_cell(x, y, self.grid.width())
    }

    /// Current grid
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Rectangles derived from the current grid
    pub fn rectangles(&self) -> &[TileRectangle] {
        &self.rectangles
    }

    /// Decals derived from the current grid
    pub const fn decals(&self) -> &DecalSet {
        &self.decals
    }

    /// Random source, for renderers that pick visual variants
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Split the session into its grid and derived data
    pub fn into_parts(self) -> (OccupancyGrid, Vec<TileRectangle>, DecalSet) {
        (self.grid, self.rectangles, self.decals)
    }
}
