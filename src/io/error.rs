//! Error types and context management for sketch cleaning operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::Coordinate;

/// Reasons a single route search can fail
///
/// These are recoverable: the pruner absorbs them per endpoint and leaves
/// the endpoint in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathfindingError {
    /// Start or end lies outside the cost field
    OutOfBounds {
        /// The offending coordinate
        coordinate: Coordinate,
        /// Cost field dimensions (height, width)
        dimensions: (usize, usize),
    },

    /// The search drained its frontier without reaching the target
    Unreachable,

    /// The search settled more nodes than its budget allows
    BudgetExhausted {
        /// Number of nodes settled before giving up
        expansions: usize,
    },
}

impl fmt::Display for PathfindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                coordinate,
                dimensions,
            } => write!(
                f,
                "{coordinate} lies outside the {}x{} cost field",
                dimensions.1, dimensions.0
            ),
            Self::Unreachable => write!(f, "target is unreachable from start"),
            Self::BudgetExhausted { expansions } => {
                write!(f, "search budget exhausted after {expansions} expansions")
            }
        }
    }
}

impl std::error::Error for PathfindingError {}

/// Main error type for all cleaning operations
#[derive(Debug)]
pub enum CleanerError {
    /// Failed to load a sketch from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Raster input that cannot be cleaned
    ///
    /// Raised for empty rasters (zero width or height) and for rasters whose
    /// dimensions disagree where they must match.
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A direct route search failed
    Pathfinding {
        /// Where the search started
        start: Coordinate,
        /// Where the search was headed
        end: Coordinate,
        /// Why it failed
        source: PathfindingError,
    },

    /// Failed to save an image to disk
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

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Pathfinding { start, end, source } => {
                write!(f, "No route from {start} to {end}: {source}")
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

impl std::error::Error for CleanerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Pathfinding { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cleaning results
pub type Result<T> = std::result::Result<T, CleanerError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches file paths to I/O errors that were converted without one
pub trait WithContext<T> {
    /// Replace an unknown path on an I/O error with `path`
    ///
    /// Errors that already carry a path, and non-I/O errors, pass through
    /// untouched.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<CleanerError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                CleanerError::ImageLoad { path: slot, .. }
                | CleanerError::ImageExport { path: slot, .. }
                | CleanerError::FileSystem { path: slot, .. } => {
                    if slot.as_os_str() == UNKNOWN_PATH {
                        *slot = path.to_path_buf();
                    }
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for CleanerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for CleanerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
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
) -> CleanerError {
    CleanerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> CleanerError {
    CleanerError::InvalidInput {
        reason: reason.to_string(),
    }
}
