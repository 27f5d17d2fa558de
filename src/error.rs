//! Error types for licwire.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for all licwire operations.
#[derive(Debug, Error)]
pub enum LicwireError {
    /// Null, empty, or otherwise malformed input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Buffer allocation failed.
    #[error("buffer allocation failed: {0}")]
    MemoryAllocFail(#[from] TryReserveError),

    /// Opening a file failed (missing, permissions, not a file).
    #[error("failed to open {}: {source}", .path.display())]
    FileOpenFail {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or probing an opened file failed, or the file was empty.
    #[error("file I/O failed on {}: {reason}", .path.display())]
    FileIoFail { path: PathBuf, reason: String },

    /// The scanner could not determine the payload length.
    #[error("payload length computation failed")]
    LengthComputationFailed(#[source] Box<LicwireError>),

    /// Destination buffer cannot hold the frame.
    #[error("buffer too small: need {needed} bytes, capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// Payload length does not fit in the fixed-width decimal header.
    #[error("payload length {len} exceeds maximum {max}")]
    PayloadTooLarge { len: usize, max: usize },

    /// JSON serialization/deserialization error (list payloads).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LicwireError.
pub type Result<T> = std::result::Result<T, LicwireError>;
