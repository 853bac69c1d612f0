//! Tileset atlas layout for tile rectangles and edge decals
//!
//! The atlas is a grid of `cell_size` squares. Each rectangle size has a few
//! interchangeable variants; each decal side has the number of variants
//! reported by [`DecalSide::variant_count`].

use crate::algorithm::decals::DecalSide;
use crate::spatial::pixels::{cell_extent, cell_offset};
use crate::spatial::{PixelRect, RectangleSize};

// (column, row) of each variant's top-left atlas cell
const ONE_BY_ONE: [[u32; 2]; 4] = [[0, 1], [1, 1], [0, 2], [1, 2]];
const TWO_BY_ONE: [[u32; 2]; 2] = [[0, 3], [2, 3]];
const ONE_BY_TWO: [[u32; 2]; 2] = [[2, 1], [3, 1]];
const TWO_BY_TWO: [[u32; 2]; 4] = [[0, 4], [2, 4], [0, 6], [2, 6]];

const DECAL_LEFT: [[u32; 2]; 1] = [[7, 2]];
const DECAL_RIGHT: [[u32; 2]; 1] = [[7, 1]];
const DECAL_TOP: [[u32; 2]; 3] = [[5, 0], [6, 0], [7, 0]];
const DECAL_BOTTOM: [[u32; 2]; 2] = [[5, 1], [6, 1]];

/// Maps tile sizes and decal sides to source rectangles in a tileset image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetAtlas {
    cell_size: u32,
}

impl TilesetAtlas {
    /// Create an atlas whose cells are `cell_size` pixels square
    pub const fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    /// Size of one atlas cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    const fn tile_cells(size: RectangleSize) -> &'static [[u32; 2]] {
        match size {
            RectangleSize::OneByOne => &ONE_BY_ONE,
            RectangleSize::TwoByOne => &TWO_BY_ONE,
            RectangleSize::OneByTwo => &ONE_BY_TWO,
            RectangleSize::TwoByTwo => &TWO_BY_TWO,
        }
    }

    const fn decal_cells(side: DecalSide) -> &'static [[u32; 2]] {
        match side {
            DecalSide::Left => &DECAL_LEFT,
            DecalSide::Right => &DECAL_RIGHT,
            DecalSide::Top => &DECAL_TOP,
            DecalSide::Bottom => &DECAL_BOTTOM,
        }
    }

    const fn cell_rect(self, cell: [u32; 2], width: usize, height: usize) -> PixelRect {
        let [column, row] = cell;
        PixelRect::new(
            cell_offset(column as usize, self.cell_size),
            cell_offset(row as usize, self.cell_size),
            cell_extent(width, self.cell_size),
            cell_extent(height, self.cell_size),
        )
    }

    /// Number of interchangeable variants for a rectangle size
    pub const fn tile_variant_count(size: RectangleSize) -> usize {
        Self::tile_cells(size).len()
    }

    /// Source rectangle of a tile variant, `None` if the variant doesn't exist
    pub fn tile_source(&self, size: RectangleSize, variant: usize) -> Option<PixelRect> {
        Self::tile_cells(size)
            .get(variant)
            .map(|&cell| self.cell_rect(cell, size.width(), size.height()))
    }

    /// Source rectangle of a decal variant, `None` if the variant doesn't exist
    pub fn decal_source(&self, side: DecalSide, variant: usize) -> Option<PixelRect> {
        Self::decal_cells(side)
            .get(variant)
            .map(|&cell| self.cell_rect(cell, 1, 1))
    }

    /// Offset subtracted from a decal's anchor when drawing, as `[x, y]`
    ///
    /// Side decals straddle the cell edge horizontally; top and bottom decals
    /// overhang vertically by a fraction of the cell.
    pub const fn decal_origin(&self, side: DecalSide) -> [f32; 2] {
        let size = self.cell_size as f32;
        match side {
            DecalSide::Left | DecalSide::Right => [size / 2.0, 0.0],
            DecalSide::Top => [0.0, size / 2.5],
            DecalSide::Bottom => [0.0, size / (1.0 + 2.0 / 3.0)],
        }
    }
}
