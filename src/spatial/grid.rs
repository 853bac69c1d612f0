//! Fixed-size occupancy grid with clamped coordinate access
//!
//! Every accessor takes signed cell coordinates so callers can probe
//! neighbours with `x - 1` or `y + 1` without special-casing the border.
//! Reads outside the grid report "unoccupied" and writes outside the grid are
//! ignored; the combiner and the decal scan both rely on this to treat the
//! exterior as permanently empty.

use ndarray::{Array2, ArrayView2};

use crate::io::configuration::{PATTERN_EMPTY, PATTERN_OCCUPIED};
use crate::io::error::{Result, invalid_mask};
use crate::spatial::pixels::{PixelRect, cell_offset};

/// Boolean tile occupancy over a fixed `width` x `height` cell area
///
/// Cells are stored row-major and indexed `[y, x]` internally, matching the
/// scan order of every pass that consumes the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
    cell_size: u32,
}

impl OccupancyGrid {
    /// Create an empty grid of `width` x `height` cells
    pub fn new(width: usize, height: usize, cell_size: u32) -> Self {
        Self {
            cells: Array2::from_elem((height, width), false),
            cell_size,
        }
    }

    /// Create an empty grid large enough to cover a pixel area
    ///
    /// Partial cells at the right and bottom edges round up to a full cell.
    pub fn from_pixel_extent(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        let cell = cell_size.max(1);
        Self::new(
            width_px.div_ceil(cell) as usize,
            height_px.div_ceil(cell) as usize,
            cell_size,
        )
    }

    /// Build a grid from rows of `#` (occupied) and `.` (empty)
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern contains no rows
    /// - Rows have differing lengths
    /// - A character other than `#` or `.` appears
    pub fn from_pattern(pattern: &str, cell_size: u32) -> Result<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(invalid_mask(&"Pattern contains no cells"));
        }

        let mut grid = Self::new(width, rows.len(), cell_size);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(invalid_mask(&format!(
                    "Pattern row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }

            for (x, symbol) in row.chars().enumerate() {
                let occupied = match symbol {
                    PATTERN_OCCUPIED => true,
                    PATTERN_EMPTY => false,
                    other => {
                        return Err(invalid_mask(&format!(
                            "Unexpected character '{other}' at row {y}, column {x}"
                        )));
                    }
                };
                grid.set(x as i32, y as i32, occupied);
            }
        }

        Ok(grid)
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Size of one cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    // Storage index for in-bounds coordinates
    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some([row, col])
    }

    /// Check whether a cell coordinate lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Read a cell; anything outside the grid is unoccupied
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Overwrite a cell; writes outside the grid are ignored
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) {
        if let Some(cell) = self
            .index(x, y)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = occupied;
        }
    }

    /// Place a tile
    pub fn add_tile(&mut self, x: i32, y: i32) {
        self.set(x, y, true);
    }

    /// Remove a tile
    pub fn remove_tile(&mut self, x: i32, y: i32) {
        self.set(x, y, false);
    }

    /// Read-only view of every cell, indexed `[y, x]`
    pub fn all(&self) -> ArrayView2<'_, bool> {
        self.cells.view()
    }

    /// Occupied cells as `(x, y)` in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &occupied)| occupied)
            .map(|((row, col), _)| (col, row))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Linear index `x + y * width` of a cell
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.width()
    }

    /// Pixel rectangle covered by a cell, if the cell is inside the grid
    pub fn cell_rect(&self, x: i32, y: i32) -> Option<PixelRect> {
        let [row, col] = self.index(x, y)?;
        Some(PixelRect::new(
            cell_offset(col, self.cell_size),
            cell_offset(row, self.cell_size),
            self.cell_size,
            self.cell_size,
        ))
    }

    /// Cell under a pixel position, if any
    pub fn cell_at_pixel(&self, px: i32, py: i32) -> Option<(usize, usize)> {
        if px < 0 || py < 0 || self.cell_size == 0 {
            return None;
        }

        // Cells wider than i32::MAX hold every non-negative pixel in column 0
        let size = i32::try_from(self.cell_size).unwrap_or(i32::MAX);
        let (x, y) = (px / size, py / size);
        self.index(x, y).map(|[row, col]| (col, row))
    }
}
