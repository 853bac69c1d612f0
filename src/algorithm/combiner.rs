//! Randomized greedy merging of occupied cells into tile rectangles
//!
//! Three passes walk the grid in row-major order and share one claim grid:
//! 2x2 merges first, then paired 2x1/1x2 merges, then a 1x1 fill that covers
//! whatever is left. Each merge attempt is gated by a per-cell probability, so
//! re-combining the same grid gives a different (always valid) tiling.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;

use crate::algorithm::claims::ClaimGrid;
use crate::io::configuration::{DEFAULT_CHANCE_2X2, DEFAULT_CHANCE_OTHER, VERTICAL_FIRST_CHANCE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{OccupancyGrid, RectangleSize, TileRectangle};

/// Merge probabilities for the combination passes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombineConfig {
    chance_2x2: f64,
    chance_other: f64,
}

impl CombineConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either probability is NaN or outside `[0, 1]`
    pub fn new(chance_2x2: f64, chance_other: f64) -> Result<Self> {
        Ok(Self {
            chance_2x2: validate_chance("chance_2x2", chance_2x2)?,
            chance_other: validate_chance("chance_other", chance_other)?,
        })
    }

    /// Per-cell probability of attempting a 2x2 merge
    pub const fn chance_2x2(&self) -> f64 {
        self.chance_2x2
    }

    /// Per-cell probability of attempting the 2x1 and 1x2 merges
    pub const fn chance_other(&self) -> f64 {
        self.chance_other
    }
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            chance_2x2: DEFAULT_CHANCE_2X2,
            chance_other: DEFAULT_CHANCE_OTHER,
        }
    }
}

fn validate_chance(parameter: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a probability between 0 and 1",
        ))
    }
}

/// Splits an occupancy grid into 1x1, 2x1, 1x2 and 2x2 rectangles
///
/// The output always covers every occupied cell exactly once and never
/// touches an empty cell. It is not a minimum-count partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleCombiner {
    config: CombineConfig,
}

impl RectangleCombiner {
    /// Create a combiner with the given merge probabilities
    pub const fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    /// Merge probabilities in use
    pub const fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Combine using the thread-local random source
    pub fn combine(&self, grid: &OccupancyGrid) -> Vec<TileRectangle> {
        self.combine_with(grid, &mut rand::rng())
    }

    /// Combine using a caller-supplied random source
    ///
    /// A seeded generator makes the result reproducible.
    pub fn combine_with<R: Rng + ?Sized>(
        &self,
        grid: &OccupancyGrid,
        rng: &mut R,
    ) -> Vec<TileRectangle> {
        let mut pass = CombinePass::new(grid);

        pass.merge_squares(self.config.chance_2x2, rng);
        pass.merge_pairs(self.config.chance_other, rng);
        pass.fill_singles();

        let rectangles = pass.rectangles;
        debug!(
            "combined {} occupied cells into {} rectangles {:?}",
            grid.occupied_count(),
            rectangles.len(),
            count_by_size(&rectangles)
        );
        rectangles
    }
}

/// Tally rectangles per size
pub fn count_by_size(rectangles: &[TileRectangle]) -> BTreeMap<RectangleSize, usize> {
    let mut counts = BTreeMap::new();
    for rectangle in rectangles {
        *counts.entry(rectangle.size).or_insert(0) += 1;
    }
    counts
}

/// State shared by the three passes of one combination
struct CombinePass<'a> {
    grid: &'a OccupancyGrid,
    claims: ClaimGrid,
    rectangles: Vec<TileRectangle>,
}

impl<'a> CombinePass<'a> {
    fn new(grid: &'a OccupancyGrid) -> Self {
        Self {
            grid,
            claims: ClaimGrid::new(grid.width(), grid.height()),
            rectangles: Vec::new(),
        }
    }

    // y outer, x inner
    fn row_major(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (width, height) = (self.grid.width(), self.grid.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    // Cells past the border read as empty, which rejects the candidate
    fn fits(&self, candidate: &TileRectangle) -> bool {
        candidate
            .cells()
            .all(|(x, y)| self.grid.get(x as i32, y as i32) && !self.claims.is_claimed(x, y))
    }

    fn try_merge(&mut self, candidate: TileRectangle) {
        if self.fits(&candidate) {
            self.claims.claim_rectangle(&candidate);
            self.rectangles.push(candidate);
        }
    }

    fn merge_squares<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R) {
        for (x, y) in self.row_major() {
            if !rng.random_bool(chance) {
                continue;
            }
            self.try_merge(TileRectangle::new(x, y, RectangleSize::TwoByTwo));
        }
    }

    fn merge_pairs<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R) {
        for (x, y) in self.row_major() {
            if !rng.random_bool(chance) {
                continue;
            }

            let (first, second) = if rng.random_bool(VERTICAL_FIRST_CHANCE) {
                (RectangleSize::OneByTwo, RectangleSize::TwoByOne)
            } else {
                (RectangleSize::TwoByOne, RectangleSize::OneByTwo)
            };

            // Claims are re-checked per attempt, so at most one of the two succeeds
            self.try_merge(TileRectangle::new(x, y, first));
            self.try_merge(TileRectangle::new(x, y, second));
        }
    }

    fn fill_singles(&mut self) {
        for (x, y) in self.row_major() {
            self.try_merge(TileRectangle::new(x, y, RectangleSize::OneByOne));
        }
    }
}
