//! Edge decal placement along the exposed sides of occupied cells
//!
//! A side is exposed when the neighbouring cell in that direction is empty or
//! lies outside the grid. Because the grid reads out-of-bounds cells as
//! empty, border cells get their outer decals without any extra checks.

use std::fmt;

use log::debug;
use rand::Rng;

use crate::spatial::pixels::cell_offset;
use crate::spatial::{OccupancyGrid, PixelPoint};

/// Side of a cell a decal is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecalSide {
    /// Faces negative x
    Left,
    /// Faces positive x
    Right,
    /// Faces negative y
    Top,
    /// Faces positive y
    Bottom,
}

impl DecalSide {
    /// Every side, in scan order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Cell offset `[dx, dy]` of the neighbour on this side
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
            Self::Top => [0, -1],
            Self::Bottom => [0, 1],
        }
    }

    /// Number of visual variants available for this side
    pub const fn variant_count(self) -> usize {
        match self {
            Self::Left | Self::Right => 1,
            Self::Top => 3,
            Self::Bottom => 2,
        }
    }

    /// Pixel anchor of a decal on this side of cell `(x, y)`
    ///
    /// Left and top decals sit at the cell's top-left corner, right decals at
    /// the top-right corner and bottom decals at the bottom-left corner.
    pub const fn anchor(self, x: usize, y: usize, cell_size: u32) -> PixelPoint {
        let left = cell_offset(x, cell_size);
        let top = cell_offset(y, cell_size);
        match self {
            Self::Left | Self::Top => PixelPoint::new(left, top),
            Self::Right => PixelPoint::new(cell_offset(x.saturating_add(1), cell_size), top),
            Self::Bottom => PixelPoint::new(left, cell_offset(y.saturating_add(1), cell_size)),
        }
    }
}

impl fmt::Display for DecalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// One decal on the boundary between an occupied cell and empty space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecalPlacement {
    /// Exposed side of the origin cell
    pub side: DecalSide,
    /// Visual variant, below `side.variant_count()`
    pub variant: usize,
    /// Anchor in pixel space
    pub position: PixelPoint,
    /// Linear index `x + y * width` of the origin cell
    pub origin_index: usize,
}

/// Append-only decal list with compaction on removal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecalSet {
    decals: Vec<DecalPlacement>,
}

impl DecalSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { decals: Vec::new() }
    }

    /// Scan a grid and collect every decal
    pub fn generate<R: Rng + ?Sized>(grid: &OccupancyGrid, rng: &mut R) -> Self {
        let mut set = Self::new();
        set.rebuild(grid, rng);
        set
    }

    /// Discard all decals and rescan the whole grid
    pub fn rebuild<R: Rng + ?Sized>(&mut self, grid: &OccupancyGrid, rng: &mut R) {
        self.decals.clear();

        for (x, y) in grid.occupied_cells() {
            let origin_index = grid.index_of(x, y);

            for side in DecalSide::ALL {
                let [dx, dy] = side.offset();
                if grid.get(x as i32 + dx, y as i32 + dy) {
                    continue;
                }

                let variant = match side.variant_count() {
                    0 | 1 => 0,
                    count => rng.random_range(0..count),
                };

                self.decals.push(DecalPlacement {
                    side,
                    variant,
                    position: side.anchor(x, y, grid.cell_size()),
                    origin_index,
                });
            }
        }

        debug!(
            "placed {} edge decals over {}x{} grid",
            self.decals.len(),
            grid.width(),
            grid.height()
        );
    }

    /// Remove every decal attached to a cell index, returning how many went
    pub fn remove_origin(&mut self, origin_index: usize) -> usize {
        let before = self.decals.len();
        self.decals
            .retain(|decal| decal.origin_index != origin_index);
        before - self.decals.len()
    }

    /// Remove every decal attached to cell `(x, y)` of a grid `width` cells wide
    pub fn remove_cell(&mut self, x: usize, y: usize, width: usize) -> usize {
        self.remove_origin(x + y * width)
    }

    /// Decals attached to one cell index
    pub fn for_origin(&self, origin_index: usize) -> impl Iterator<Item = &DecalPlacement> {
        self.decals
            .iter()
            .filter(move |decal| decal.origin_index == origin_index)
    }

    /// Remove all decals
    pub fn clear(&mut self) {
        self.decals.clear();
    }

    /// Number of decals
    pub const fn len(&self) -> usize {
        self.decals.len()
    }

    /// Test if there are no decals
    pub const fn is_empty(&self) -> bool {
        self.decals.is_empty()
    }

    /// Iterate in placement order
    pub fn iter(&self) -> std::slice::Iter<'_, DecalPlacement> {
        self.decals.iter()
    }

    /// Decals as a slice, in placement order
    pub const fn as_slice(&self) -> &[DecalPlacement] {
        self.decals.as_slice()
    }
}

impl<'a> IntoIterator for &'a DecalSet {
    type Item = &'a DecalPlacement;
    type IntoIter = std::slice::Iter<'a, DecalPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.decals.iter()
    }
}

/// Collect decals for every exposed side of every occupied cell
pub fn generate_decals<R: Rng + ?Sized>(grid: &OccupancyGrid, rng: &mut R) -> DecalSet {
    DecalSet::generate(grid, rng)
}
