//! Error types for maze generation, search, rendering and document handling

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Point;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Requested grid size lies outside the accepted bounds
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Explanation of which bound was violated
        reason: String,
    },

    /// A generation mode needs an input that was not supplied
    MissingInput {
        /// Name of the missing input
        input: &'static str,
    },

    /// Source image bytes could not be decoded
    VisionDecode {
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Unknown generation mode or search algorithm name
    UnsupportedOption {
        /// Kind of option being parsed
        option: &'static str,
        /// Value that was not recognised
        value: String,
    },

    /// Manually placed start or end point is not on the outer border
    Boundary {
        /// Offending coordinate
        point: Point,
        /// Maze dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Search endpoint lies outside the grid
    OutOfBounds {
        /// Offending coordinate
        point: Point,
        /// Maze dimensions (rows, cols)
        dimensions: (usize, usize),
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

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

    /// Maze or solution document could not be encoded or decoded
    Document {
        /// Description of the document operation
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid maze dimensions {rows}x{cols}: {reason}")
            }
            Self::MissingInput { input } => {
                write!(f, "Missing required input: {input}")
            }
            Self::VisionDecode { source } => {
                write!(f, "Failed to decode source image: {source}")
            }
            Self::UnsupportedOption { option, value } => {
                write!(f, "Unsupported {option} '{value}'")
            }
            Self::Boundary { point, dimensions } => {
                write!(
                    f,
                    "Point ({}, {}) is not on the border of a {}x{} maze",
                    point[0], point[1], dimensions.0, dimensions.1
                )
            }
            Self::OutOfBounds { point, dimensions } => {
                write!(
                    f,
                    "Point ({}, {}) is outside a {}x{} maze",
                    point[0], point[1], dimensions.0, dimensions.1
                )
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
            Self::Document { operation, source } => {
                write!(f, "Document error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::VisionDecode { source } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Document { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::VisionDecode { source: err }
    }
}

impl From<std::io::Error> for MazeError {
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
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unsupported option error
pub fn unsupported_option(option: &'static str, value: &impl ToString) -> MazeError {
    MazeError::UnsupportedOption {
        option,
        value: value.to_string(),
    }
}

/// Create a file system error for the given path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
