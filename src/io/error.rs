//! Error types for document handling and artifact export
//!
//! The geometry engine itself never fails: numeric edge cases are floored
//! or clamped in place. Errors only arise at the document boundary and
//! when writing files.

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum PatternError {
    /// A document file could not be parsed
    DocumentParse {
        /// Path to the document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A document could not be serialized
    DocumentEncode {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Document content violates a structural requirement
    InvalidDocument {
        /// Description of what's wrong with the document
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

    /// Layer index outside the document
    LayerIndex {
        /// The requested index
        index: usize,
        /// Number of layers in the document
        layer_count: usize,
    },

    /// Failed to encode or save a raster image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentParse { path, source } => {
                write!(f, "Failed to parse document '{}': {source}", path.display())
            }
            Self::DocumentEncode { source } => {
                write!(f, "Failed to encode document: {source}")
            }
            Self::InvalidDocument { reason } => {
                write!(f, "Invalid document: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LayerIndex { index, layer_count } => {
                write!(
                    f,
                    "Layer index {index} is out of bounds (document has {layer_count} layers)"
                )
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

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DocumentParse { source, .. } | Self::DocumentEncode { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PatternError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PatternError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for PatternError {
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
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid document error
pub fn invalid_document(reason: &impl ToString) -> PatternError {
    PatternError::InvalidDocument {
        reason: reason.to_string(),
    }
}
