//! Debug overlay rendering and PNG export
//!
//! Occupied cells are painted solid, each rectangle gets a translucent
//! size-coded overlay plus an outline, and every decal becomes a thin strip
//! along the exposed side of its cell.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::decals::{DecalPlacement, DecalSide};
use crate::io::configuration::{
    COLOR_1X1, COLOR_1X2, COLOR_2X1, COLOR_2X2, COLOR_DECAL, COLOR_EMPTY, COLOR_TILE,
    DEBUG_OVERLAY_OPACITY, MAX_IMAGE_DIMENSION,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::spatial::{OccupancyGrid, PixelRect, RectangleSize, TileRectangle};

/// Overlay colour used for a rectangle size
pub const fn overlay_color(size: RectangleSize) -> [u8; 4] {
    match size {
        RectangleSize::TwoByTwo => COLOR_2X2,
        RectangleSize::TwoByOne => COLOR_2X1,
        RectangleSize::OneByTwo => COLOR_1X2,
        RectangleSize::OneByOne => COLOR_1X1,
    }
}

// Image extent for a run of cells, within the export limits
fn pixel_extent(cells: usize, cell_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(cell_size))
        .filter(|&extent| extent > 0 && extent <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("{cells} cells must render within 1..={MAX_IMAGE_DIMENSION} pixels"),
            )
        })
}

fn fill_rect(img: &mut RgbaImage, rect: PixelRect, color: [u8; 4]) {
    for py in rect.y.max(0)..rect.bottom() {
        for px in rect.x.max(0)..rect.right() {
            if let Some(pixel) = img.get_pixel_mut_checked(px as u32, py as u32) {
                *pixel = Rgba(color);
            }
        }
    }
}

fn blend_rect(img: &mut RgbaImage, rect: PixelRect, color: [u8; 4], opacity: f32) {
    for py in rect.y.max(0)..rect.bottom() {
        for px in rect.x.max(0)..rect.right() {
            if let Some(pixel) = img.get_pixel_mut_checked(px as u32, py as u32) {
                for (channel, &overlay) in pixel.0.iter_mut().zip(color.iter()) {
                    let mixed = f32::from(overlay)
                        .mul_add(opacity, f32::from(*channel) * (1.0 - opacity));
                    *channel = mixed.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

fn outline_rect(img: &mut RgbaImage, rect: PixelRect, color: [u8; 4]) {
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
    fill_rect(img, PixelRect::new(rect.x, rect.y, rect.width, 1), color);
    fill_rect(img, PixelRect::new(rect.x, bottom, rect.width, 1), color);
    fill_rect(img, PixelRect::new(rect.x, rect.y, 1, rect.height), color);
    fill_rect(img, PixelRect::new(right, rect.y, 1, rect.height), color);
}

// Strip hugging the exposed side, measured back from the decal anchor
const fn decal_strip(decal: &DecalPlacement, cell_size: u32, thickness: u32) -> PixelRect {
    let (x, y) = (decal.position.x, decal.position.y);
    match decal.side {
        DecalSide::Left => PixelRect::new(x, y, thickness, cell_size),
        DecalSide::Right => {
            PixelRect::new(x.saturating_sub_unsigned(thickness), y, thickness, cell_size)
        }
        DecalSide::Top => PixelRect::new(x, y, cell_size, thickness),
        DecalSide::Bottom => {
            PixelRect::new(x, y.saturating_sub_unsigned(thickness), cell_size, thickness)
        }
    }
}

/// Draw the grid, its rectangles and its decals into an image
///
/// # Errors
///
/// Returns an error if the rendered image would be empty or exceed the
/// maximum image dimension
pub fn render_debug_image<'a, I>(
    grid: &OccupancyGrid,
    rectangles: &[TileRectangle],
    decals: I,
) -> Result<RgbaImage>
where
    I: IntoIterator<Item = &'a DecalPlacement>,
{
    let cell_size = grid.cell_size();
    let width = pixel_extent(grid.width(), cell_size)?;
    let height = pixel_extent(grid.height(), cell_size)?;

    let mut img = RgbaImage::from_pixel(width, height, Rgba(COLOR_EMPTY));

    for (x, y) in grid.occupied_cells() {
        if let Some(rect) = grid.cell_rect(x as i32, y as i32) {
            fill_rect(&mut img, rect, COLOR_TILE);
        }
    }

    for rectangle in rectangles {
        let rect = rectangle.pixel_rect(cell_size);
        let color = overlay_color(rectangle.size);
        blend_rect(&mut img, rect, color, DEBUG_OVERLAY_OPACITY);
        outline_rect(&mut img, rect, color);
    }

    let thickness = (cell_size / 8).max(1);
    for decal in decals {
        fill_rect(&mut img, decal_strip(decal, cell_size, thickness), COLOR_DECAL);
    }

    Ok(img)
}

/// Render the debug overlay and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The image would be empty or exceed the maximum image dimension
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_debug_png<'a, I>(
    grid: &OccupancyGrid,
    rectangles: &[TileRectangle],
    decals: I,
    output_path: &Path,
) -> Result<()>
where
    I: IntoIterator<Item = &'a DecalPlacement>,
{
    let img = render_debug_image(grid, rectangles, decals)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| TileError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
