use bitvec::prelude::*;
use std::fmt;

use crate::spatial::TileRectangle;

/// Dense record of cells already assigned to a rectangle
///
/// Mirrors the occupancy grid's shape with one bit per cell, so claiming and
/// testing are O(1). Shared by all three combination passes; a claimed cell
/// is never handed out again.
#[derive(Clone, Debug)]
pub struct ClaimGrid {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl ClaimGrid {
    /// Create a grid with no cells claimed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(x + y * self.width)
    }

    /// Mark a cell as claimed
    ///
    /// Cells outside the grid are ignored.
    pub fn claim(&mut self, x: usize, y: usize) {
        if let Some(mut bit) = self.offset(x, y).and_then(|i| self.bits.get_mut(i)) {
            *bit = true;
        }
    }

    /// Claim every cell a rectangle covers
    pub fn claim_rectangle(&mut self, rectangle: &TileRectangle) {
        for (x, y) in rectangle.cells() {
            self.claim(x, y);
        }
    }

    /// Test whether a cell has been claimed
    pub fn is_claimed(&self, x: usize, y: usize) -> bool {
        self.offset(x, y)
            .and_then(|i| self.bits.get(i))
            .as_deref()
            == Some(&true)
    }

    /// Test whether any cell of a rectangle has been claimed
    pub fn any_claimed(&self, rectangle: &TileRectangle) -> bool {
        rectangle.cells().any(|(x, y)| self.is_claimed(x, y))
    }

    /// Count claimed cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if nothing has been claimed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for ClaimGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClaimGrid({}x{}, {} claimed)",
            self.width,
            self.height,
            self.count()
        )
    }
}
