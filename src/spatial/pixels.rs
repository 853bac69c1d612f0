//! Pixel-space geometry shared by the decal scan, the atlas and the exporters

/// Pixel offset of cell `cell` along one axis, saturating at `i32::MAX`
pub const fn cell_offset(cell: usize, cell_size: u32) -> i32 {
    let offset = (cell as u64).saturating_mul(cell_size as u64);
    if offset > i32::MAX as u64 {
        i32::MAX
    } else {
        offset as i32
    }
}

/// Pixel length of a run of `cells` cells, saturating at `u32::MAX`
pub const fn cell_extent(cells: usize, cell_size: u32) -> u32 {
    let extent = (cells as u64).saturating_mul(cell_size as u64);
    if extent > u32::MAX as u64 {
        u32::MAX
    } else {
        extent as u32
    }
}

/// Point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    /// Horizontal position in pixels
    pub x: i32,
    /// Vertical position in pixels (grows downwards)
    pub y: i32,
}

impl PixelPoint {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Create a rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Check whether a pixel lies inside the rectangle
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}
