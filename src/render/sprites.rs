//! Sprite layout for renderers consuming rectangles and decals
//!
//! Nothing here draws; it pairs each derived item with its destination and
//! atlas source so a host renderer can blit them directly.

use rand::Rng;

use crate::algorithm::decals::{DecalPlacement, DecalSide};
use crate::render::atlas::TilesetAtlas;
use crate::spatial::{PixelRect, TileRectangle};

/// A tile rectangle ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSprite {
    /// Where the tile lands on screen
    pub destination: PixelRect,
    /// Where the chosen variant sits in the atlas
    pub source: PixelRect,
}

/// An edge decal ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecalSprite {
    /// Top-left draw position (anchor minus origin), as `[x, y]`
    pub position: [f32; 2],
    /// Where the decal variant sits in the atlas
    pub source: PixelRect,
    /// Side the decal belongs to
    pub side: DecalSide,
}

/// Pick a random atlas variant for every rectangle
///
/// Destinations are computed with the atlas cell size, so the atlas and the
/// grid are expected to share a cell size.
pub fn layout_tiles<R: Rng + ?Sized>(
    rectangles: &[TileRectangle],
    atlas: &TilesetAtlas,
    rng: &mut R,
) -> Vec<TileSprite> {
    rectangles
        .iter()
        .filter_map(|rectangle| {
            let variants = TilesetAtlas::tile_variant_count(rectangle.size);
            let variant = rng.random_range(0..variants);
            atlas
                .tile_source(rectangle.size, variant)
                .map(|source| TileSprite {
                    destination: rectangle.pixel_rect(atlas.cell_size()),
                    source,
                })
        })
        .collect()
}

/// Resolve every decal to its draw position and atlas source
///
/// Decals whose variant has no atlas entry are skipped.
pub fn layout_decals<'a, I>(decals: I, atlas: &TilesetAtlas) -> Vec<DecalSprite>
where
    I: IntoIterator<Item = &'a DecalPlacement>,
{
    decals
        .into_iter()
        .filter_map(|decal| {
            let [origin_x, origin_y] = atlas.decal_origin(decal.side);
            atlas
                .decal_source(decal.side, decal.variant)
                .map(|source| DecalSprite {
                    position: [
                        decal.position.x as f32 - origin_x,
                        decal.position.y as f32 - origin_y,
                    ],
                    source,
                    side: decal.side,
                })
        })
        .collect()
}
