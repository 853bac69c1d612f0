//! Error types for the mask loading, export and configuration surfaces
//!
//! The tiling core itself never fails: out-of-range coordinates clamp to
//! "unoccupied" on read and are ignored on write. Errors only arise where the
//! crate touches the filesystem, decodes images, or validates tunables.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum TileError {
    /// Failed to read or decode a mask file
    MaskLoad {
        /// Path to the mask file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Mask data doesn't describe a usable grid
    InvalidMask {
        /// Description of what's wrong with the mask
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaskLoad { path, source } => {
                write!(f, "Failed to load mask '{}': {source}", path.display())
            }
            Self::InvalidMask { reason } => {
                write!(f, "Invalid mask: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MaskLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, TileError>;

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> Self {
        Self::MaskLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid mask error
pub fn invalid_mask(reason: &impl ToString) -> TileError {
    TileError::InvalidMask {
        reason: reason.to_string(),
    }
}

/// Create a path-related error for CLI target validation
pub fn io_error(msg: &str) -> TileError {
    TileError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

