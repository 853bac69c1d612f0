/// Dense claimed-cell tracking shared by the combination passes
pub mod claims;
/// Randomized greedy rectangle combination
pub mod combiner;
/// Edge decal placement and storage
pub mod decals;
/// Editing session keeping grid, rectangles and decals in step
pub mod editor;

pub use combiner::{CombineConfig, RectangleCombiner};
pub use decals::{DecalPlacement, DecalSet, DecalSide, generate_decals};
pub use editor::TileEditor;
