//! Diagnosis Error Types

use leaf_features::FrameError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the application boundary
///
/// Feature extraction and classification never fail; everything here
/// happens before or after them.
#[derive(Debug, Error)]
pub enum DiagnoseError {
    /// The image source supplied nothing (e.g. selection cancelled)
    #[error("No input image selected")]
    NoInputSelected,

    #[error("Could not decode image: {0}")]
    Decode(#[from] FrameError),

    #[error("Could not read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Logging(String),
}

impl DiagnoseError {
    /// Whether the input could not be read or decoded
    pub fn is_unreadable_input(&self) -> bool {
        matches!(self, DiagnoseError::Decode(_) | DiagnoseError::ReadInput { .. })
    }
}
