//! Tile rectangles produced by the combiner

use std::fmt;

use crate::spatial::pixels::{PixelRect, cell_extent, cell_offset};

/// The four legal rectangle extents, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RectangleSize {
    /// 1 wide, 1 tall
    OneByOne,
    /// 2 wide, 1 tall
    TwoByOne,
    /// 1 wide, 2 tall
    OneByTwo,
    /// 2 wide, 2 tall
    TwoByTwo,
}

impl RectangleSize {
    /// Every legal size, smallest first
    pub const ALL: [Self; 4] = [Self::OneByOne, Self::TwoByOne, Self::OneByTwo, Self::TwoByTwo];

    /// Width in cells
    pub const fn width(self) -> usize {
        match self {
            Self::OneByOne | Self::OneByTwo => 1,
            Self::TwoByOne | Self::TwoByTwo => 2,
        }
    }

    /// Height in cells
    pub const fn height(self) -> usize {
        match self {
            Self::OneByOne | Self::TwoByOne => 1,
            Self::OneByTwo | Self::TwoByTwo => 2,
        }
    }

    /// Number of cells covered
    pub const fn cell_count(self) -> usize {
        self.width() * self.height()
    }

    /// Look up the size with the given extent
    pub const fn from_dimensions(width: usize, height: usize) -> Option<Self> {
        match (width, height) {
            (1, 1) => Some(Self::OneByOne),
            (2, 1) => Some(Self::TwoByOne),
            (1, 2) => Some(Self::OneByTwo),
            (2, 2) => Some(Self::TwoByTwo),
            _ => None,
        }
    }
}

impl fmt::Display for RectangleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// A group of occupied cells drawn as one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileRectangle {
    /// Left cell column
    pub x: usize,
    /// Top cell row
    pub y: usize,
    /// Extent in cells
    pub size: RectangleSize,
}

impl TileRectangle {
    /// Create a rectangle anchored at its top-left cell
    pub const fn new(x: usize, y: usize, size: RectangleSize) -> Self {
        Self { x, y, size }
    }

    /// Width in cells
    pub const fn width(&self) -> usize {
        self.size.width()
    }

    /// Height in cells
    pub const fn height(&self) -> usize {
        self.size.height()
    }

    /// Check whether the rectangle covers a cell
    pub const fn covers(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width() && y >= self.y && y < self.y + self.height()
    }

    /// Covered cells as `(x, y)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (x, y, size) = (self.x, self.y, self.size);
        (0..size.height()).flat_map(move |dy| (0..size.width()).map(move |dx| (x + dx, y + dy)))
    }

    /// Destination rectangle in pixel space
    pub const fn pixel_rect(&self, cell_size: u32) -> PixelRect {
        PixelRect::new(
            cell_offset(self.x, cell_size),
            cell_offset(self.y, cell_size),
            cell_extent(self.width(), cell_size),
            cell_extent(self.height(), cell_size),
        )
    }
}
