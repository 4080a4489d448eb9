//! Custom error types for exticon.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the exticon library.
#[derive(Error, Debug)]
pub enum Error {
    /// The source image does not exist.
    #[error("source image not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to open or decode the source image.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an icon.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exticon operations.
pub type Result<T> = std::result::Result<T, Error>;
