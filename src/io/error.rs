//! Error types for grid, level and history operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile-grid operations
///
/// Every variant is a local, recoverable condition. Operations that return
/// one of these leave the data they were called on untouched.
#[derive(Debug)]
pub enum EditorError {
    /// Tile key does not follow the `sprite_x-sprite_y-type_id` format
    MalformedTileKey {
        /// The offending key as it was supplied
        key: String,
        /// Which part of the key failed to parse
        reason: &'static str,
    },

    /// Flat index cannot be mapped onto a grid row
    ///
    /// Raised for negative indices or a zero-width grid.
    OutOfRange {
        /// The index that was supplied
        index: i64,
        /// Width of the grid the index was mapped against
        width: usize,
    },

    /// Index addresses a cell past the end of the tile array
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of cells in the tile array
        len: usize,
    },

    /// Tile array length disagrees with the grid dimensions
    SizeMismatch {
        /// Cell count implied by `width * height`
        expected: usize,
        /// Length of the supplied array
        actual: usize,
    },

    /// Grid dimensions must both be positive
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// No level with this name exists in the collection
    UnknownLevel {
        /// Name that was looked up
        name: String,
    },

    /// A level with this name already exists and overwrite was not confirmed
    DuplicateLevel {
        /// Name that collided
        name: String,
    },

    /// Operation needs a current level but the collection holds none
    EmptyCollection {
        /// Operation that required a level
        operation: &'static str,
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

    /// Level document could not be parsed or produced
    LevelFile {
        /// What was being done with the document
        reason: String,
        /// Underlying JSON error
        source: serde_json::Error,
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

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTileKey { key, reason } => {
                write!(f, "Malformed tile key '{key}': {reason}")
            }
            Self::OutOfRange { index, width } => {
                write!(
                    f,
                    "Index {index} cannot be mapped onto a grid of width {width}"
                )
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Tile index {index} is out of bounds (len: {len})")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Tile array size mismatch: expected {expected} cells, got {actual}"
                )
            }
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid grid dimensions {width}x{height}: both must be positive"
                )
            }
            Self::UnknownLevel { name } => write!(f, "Unknown level '{name}'"),
            Self::DuplicateLevel { name } => {
                write!(f, "Level '{name}' already exists")
            }
            Self::EmptyCollection { operation } => {
                write!(f, "Cannot {operation}: the level collection is empty")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LevelFile { reason, source } => {
                write!(f, "Level file error ({reason}): {source}")
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

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LevelFile { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EditorError>;

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::LevelFile {
            reason: "unknown".to_string(),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EditorError {
    EditorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a level document error
pub fn level_file_error(reason: &impl ToString, source: serde_json::Error) -> EditorError {
    EditorError::LevelFile {
        reason: reason.to_string(),
        source,
    }
}
