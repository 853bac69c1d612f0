//! Input/output surfaces around the tiling core

/// Command-line arguments and batch file processing
pub mod cli;
/// Tunables and runtime configuration defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Debug overlay rendering and PNG export
pub mod image;
/// Occupancy mask loading
pub mod mask;
/// Terminal progress reporting
pub mod progress;
