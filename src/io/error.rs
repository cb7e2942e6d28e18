//! Error types for synthesis, ingestion and packaging

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pack operations
#[derive(Debug)]
pub enum PackError {
    /// Generation was requested before a source image was loaded
    NoSourceImage,

    /// Packaging was requested before any generation succeeded
    NothingGenerated,

    /// Category identifier outside the known set
    UnknownCategory {
        /// Identifier that failed to parse
        value: String,
    },

    /// Layout identifier outside the known set
    UnsupportedLayoutKind {
        /// Identifier that failed to parse
        value: String,
    },

    /// Input bytes could not be decoded as an image
    ImageDecode {
        /// Path of the rejected input
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Source data doesn't meet synthesis requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Failed to encode a raster
    ImageExport {
        /// Destination of the encoded image
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Failed to write the zip archive
    Archive {
        /// Path of the archive being written
        path: PathBuf,
        /// Underlying zip error
        source: zip::result::ZipError,
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

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceImage => {
                write!(f, "No source image loaded; load an image before generating")
            }
            Self::NothingGenerated => {
                write!(f, "Nothing generated yet; run a generation before packaging")
            }
            Self::UnknownCategory { value } => {
                write!(
                    f,
                    "Unknown category '{value}' (expected terrain_basic, structure, liquid or nature_prop)"
                )
            }
            Self::UnsupportedLayoutKind { value } => {
                write!(
                    f,
                    "Unsupported layout '{value}' (expected atlas, sheet or single)"
                )
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Archive { path, source } => {
                write!(f, "Failed to write archive '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pack results
pub type Result<T> = std::result::Result<T, PackError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl PackError {
    /// Whether the error was raised by the caller's input rather than the environment
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NoSourceImage
                | Self::NothingGenerated
                | Self::UnknownCategory { .. }
                | Self::UnsupportedLayoutKind { .. }
                | Self::ImageDecode { .. }
                | Self::InvalidSourceData { .. }
                | Self::InvalidParameter { .. }
        )
    }
}
