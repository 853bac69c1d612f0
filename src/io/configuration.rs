//! Tunables and runtime configuration defaults

// Combination tunables; these only affect visual variety, never correctness
/// Per-cell probability of attempting a 2x2 merge
pub const DEFAULT_CHANCE_2X2: f64 = 0.2;
/// Per-cell probability of attempting the 2x1 and 1x2 merges
pub const DEFAULT_CHANCE_OTHER: f64 = 0.5;
/// Probability that the vertical merge is tried before the horizontal one
pub const VERTICAL_FIRST_CHANCE: f64 = 0.5;

/// Default size of a grid cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 64;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 4096;
/// Maximum allowed dimension of a rendered image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Mask decoding
/// Minimum alpha for a mask pixel to count as a tile
pub const MASK_ALPHA_THRESHOLD: u8 = 128;
/// Mean RGB below which an opaque mask pixel counts as a tile
pub const MASK_LUMA_THRESHOLD: u16 = 128;
/// Character marking an occupied cell in text masks
pub const PATTERN_OCCUPIED: char = '#';
/// Character marking an empty cell in text masks
pub const PATTERN_EMPTY: char = '.';

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of stages reported per processed file
pub const PROCESSING_STAGES: usize = 4;

/// Fixed seed used when reproducible output is requested without a value
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_tiles";
/// Extension of the debug images written by the CLI
pub const OUTPUT_EXTENSION: &str = "png";

// Debug overlay colours
/// Opacity of the per-size overlay drawn on top of occupied cells
pub const DEBUG_OVERLAY_OPACITY: f32 = 0.3;
/// Overlay colour for 2x2 rectangles
pub const COLOR_2X2: [u8; 4] = [255, 0, 0, 255];
/// Overlay colour for 2x1 rectangles
pub const COLOR_2X1: [u8; 4] = [0, 128, 0, 255];
/// Overlay colour for 1x2 rectangles
pub const COLOR_1X2: [u8; 4] = [154, 205, 50, 255];
/// Overlay colour for 1x1 rectangles
pub const COLOR_1X1: [u8; 4] = [255, 255, 255, 255];
/// Base colour of an occupied cell
pub const COLOR_TILE: [u8; 4] = [96, 72, 48, 255];
/// Colour of edge decal strips
pub const COLOR_DECAL: [u8; 4] = [60, 160, 60, 255];
/// Background colour of empty cells
pub const COLOR_EMPTY: [u8; 4] = [0, 0, 0, 0];
