//! Occupancy mask loading from PNG images and text patterns

use std::path::Path;

use image::RgbaImage;

use crate::io::configuration::{
    MASK_ALPHA_THRESHOLD, MASK_LUMA_THRESHOLD, MAX_GRID_DIMENSION, MAX_IMAGE_DIMENSION,
};
use crate::io::error::{Result, TileError, invalid_mask};
use crate::spatial::OccupancyGrid;
use crate::spatial::pixels::cell_extent;

/// Load a mask, choosing the decoder from the file extension
///
/// `.png` files map one pixel to one cell; `.txt` files hold rows of `#`
/// and `.` characters.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is neither `png` nor `txt`
/// - The file cannot be read or decoded
/// - The mask is empty or exceeds the maximum grid dimension
/// - The mask would not fit the maximum image size at `cell_size`
pub fn load_mask(path: &Path, cell_size: u32) -> Result<OccupancyGrid> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => load_png_mask(path, cell_size),
        Some("txt") => load_text_mask(path, cell_size),
        _ => Err(invalid_mask(&format!(
            "Unsupported mask file '{}' (expected .png or .txt)",
            path.display()
        ))),
    }
}

/// Load a PNG mask
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or has an unusable size
pub fn load_png_mask(path: &Path, cell_size: u32) -> Result<OccupancyGrid> {
    let img = image::open(path).map_err(|e| TileError::MaskLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    grid_from_image(&img.to_rgba8(), cell_size)
}

/// Load a text pattern mask
///
/// # Errors
///
/// Returns an error if the file cannot be read or the pattern is malformed
pub fn load_text_mask(path: &Path, cell_size: u32) -> Result<OccupancyGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "read mask",
        source: e,
    })?;

    let grid = OccupancyGrid::from_pattern(&text, cell_size)?;
    check_dimensions(grid.width(), grid.height(), cell_size)?;
    Ok(grid)
}

/// Convert decoded pixels to a grid, one pixel per cell
///
/// # Errors
///
/// Returns an error if the image is empty, exceeds the maximum grid dimension
/// or would not fit the maximum image size at `cell_size`
pub fn grid_from_image(image: &RgbaImage, cell_size: u32) -> Result<OccupancyGrid> {
    let (width, height) = image.dimensions();
    check_dimensions(width as usize, height as usize, cell_size)?;

    let mut grid = OccupancyGrid::new(width as usize, height as usize, cell_size);
    for (x, y, pixel) in image.enumerate_pixels() {
        if is_tile_pixel(pixel.0) {
            grid.add_tile(x as i32, y as i32);
        }
    }

    Ok(grid)
}

/// A pixel is a tile when it is mostly opaque and dark
pub const fn is_tile_pixel(rgba: [u8; 4]) -> bool {
    let [r, g, b, a] = rgba;
    let mean = (r as u16 + g as u16 + b as u16) / 3;
    a >= MASK_ALPHA_THRESHOLD && mean < MASK_LUMA_THRESHOLD
}

// Masks must fit both the grid limits and, once scaled, the image limits
fn check_dimensions(width: usize, height: usize, cell_size: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_mask(&"Mask has no cells"));
    }

    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(invalid_mask(&format!(
            "Mask is {width}x{height}, larger than the {MAX_GRID_DIMENSION} cell limit"
        )));
    }

    let (width_px, height_px) = (cell_extent(width, cell_size), cell_extent(height, cell_size));
    if width_px > MAX_IMAGE_DIMENSION || height_px > MAX_IMAGE_DIMENSION {
        return Err(invalid_mask(&format!(
            "Mask is {width}x{height} cells of {cell_size} px, which renders larger than the \
             {MAX_IMAGE_DIMENSION} pixel limit"
        )));
    }

    Ok(())
}
