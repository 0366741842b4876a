//! Error types for word-cloud generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all word-cloud operations
///
/// Per-word placement failure is deliberately not represented here: a word
/// that cannot be placed is dropped and counted in the run summary, which
/// never aborts a run.
#[derive(Debug)]
pub enum CloudError {
    /// Mask image bytes could not be decoded or have degenerate dimensions
    InvalidMaskFormat {
        /// Description of what's wrong with the mask
        reason: String,
    },

    /// No valid words remain after filtering and deduplication
    EmptyInput,

    /// Font file is absent or not a parseable font
    FontResource {
        /// Path to the font file, if loaded from disk
        path: Option<PathBuf>,
        /// Description of the failure
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save the rendered raster
    ImageExport {
        /// Path where export was attempted, if any
        path: Option<PathBuf>,
        /// Underlying image error
        source: image::ImageError,
    },

    /// Failed to serialize the frequency table
    TableExport {
        /// Description of the failure
        reason: String,
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

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaskFormat { reason } => {
                write!(f, "Invalid mask image: {reason}")
            }
            Self::EmptyInput => {
                write!(f, "No valid words to lay out after filtering")
            }
            Self::FontResource { path, reason } => match path {
                Some(p) => write!(f, "Font resource '{}' unusable: {reason}", p.display()),
                None => write!(f, "Font resource unusable: {reason}"),
            },
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => match path {
                Some(p) => write!(f, "Failed to export image to '{}': {source}", p.display()),
                None => write!(f, "Failed to encode image: {source}"),
            },
            Self::TableExport { reason } => {
                write!(f, "Failed to encode frequency table: {reason}")
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

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for word-cloud results
pub type Result<T> = std::result::Result<T, CloudError>;

impl From<image::ImageError> for CloudError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: None,
            source: err,
        }
    }
}

impl From<std::io::Error> for CloudError {
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
) -> CloudError {
    CloudError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid mask error
pub fn invalid_mask(reason: &impl ToString) -> CloudError {
    CloudError::InvalidMaskFormat {
        reason: reason.to_string(),
    }
}

/// Create a font resource error for a file path
pub fn font_error(path: &std::path::Path, reason: &impl ToString) -> CloudError {
    CloudError::FontResource {
        path: Some(path.to_path_buf()),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_parameter_details() {
        let err = invalid_parameter("max_words", &0, &"must be at least 1");
        let rendered = err.to_string();
        assert!(rendered.contains("max_words"));
        assert!(rendered.contains("must be at least 1"));
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        use std::error::Error;

        let err = CloudError::FileSystem {
            path: PathBuf::from("words.txt"),
            operation: "read",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
    }
}
