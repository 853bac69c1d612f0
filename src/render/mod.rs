//! Renderer-facing data: atlas lookups and sprite layout

/// Tileset atlas coordinates for tiles and decals
pub mod atlas;
/// Destination/source pairing for tiles and decals
pub mod sprites;

pub use atlas::TilesetAtlas;
pub use sprites::{DecalSprite, TileSprite, layout_decals, layout_tiles};
