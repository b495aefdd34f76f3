// Rust guideline compliant 2026-02-06

//! Error types for the Hooksieve core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Hooksieve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hooksieve operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document is not YAML, or lacks the expected `repos`/`hooks`/`id` shape.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The filtered document could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        /// Target path of the write.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid tool settings.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl Error {
    /// Builds a `MalformedDocument` error anchored at a document location.
    pub(crate) fn malformed(location: &str, message: &str) -> Self {
        if location.is_empty() {
            Error::MalformedDocument(message.to_string())
        } else {
            Error::MalformedDocument(format!("{}: {}", location, message))
        }
    }
}
