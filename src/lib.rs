//! Randomized greedy merging of occupied grid cells into larger tiles
//!
//! An occupancy grid is partitioned into 2x2, 2x1, 1x2 and 1x1 rectangles in
//! three passes, with per-cell random gates deciding which larger merges are
//! attempted. Every exposed side of an occupied cell also receives an edge
//! decal so renderers can dress the silhouette.

#![forbid(unsafe_code)]

/// Rectangle combination, decal generation and the editing session
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Atlas lookups and sprite layout for renderers
pub mod render;
/// Grid, rectangle and pixel geometry
pub mod spatial;

pub use io::error::{Result, TileError};
