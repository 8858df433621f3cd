//! Error types for pdfslabs.

use std::path::PathBuf;

/// Errors that can occur while loading, chunking or serializing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap exceeds chunk size.
    #[error("overlap {overlap} exceeds chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that exceeded the size.
        overlap: usize,
    },

    /// The file is missing, unreadable, or not a PDF.
    #[error("failed to load PDF {}: {source}", path.display())]
    Pdf {
        /// Path (or in-memory source name) of the document.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: lopdf::Error,
    },

    /// Output could not be serialized.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pdfslabs operations.
pub type Result<T> = std::result::Result<T, Error>;
