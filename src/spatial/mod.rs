//! Spatial data structures
//!
//! This module contains the grid-side building blocks:
//! - The occupancy grid edited by the user
//! - Tile rectangles produced by the combiner
//! - Pixel-space points and rectangles handed to renderers

/// Occupancy grid with clamped coordinate access
pub mod grid;
/// Pixel-space geometry
pub mod pixels;
/// Tile rectangle sizes and placement
pub mod rectangle;

pub use grid::OccupancyGrid;
pub use pixels::{PixelPoint, PixelRect};
pub use rectangle::{RectangleSize, TileRectangle};
