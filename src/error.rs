//! Error types for the gputype library

use std::io;
use thiserror::Error;

/// Main error type for detection operations
#[derive(Error, Debug)]
pub enum DetectError {
    /// Could not open a session with the hardware-management subsystem
    #[error("Failed to connect to hardware inventory: {0}")]
    Connection(String),

    /// The video controller query could not be completed
    #[error("Video controller query failed: {0}")]
    Query(String),

    /// Reading the device inventory failed
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// System permission error
    #[error("Permission denied: {0}")]
    Permission(String),

    /// No hardware inventory is available on this platform
    #[error("Hardware inventory not supported on {0}")]
    Unsupported(&'static str),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<io::Error> for DetectError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => DetectError::Permission(err.to_string()),
            io::ErrorKind::NotFound => DetectError::Query(format!("inventory not found: {}", err)),
            _ => DetectError::Io(err),
        }
    }
}

/// Result type for detection operations
pub type DetectResult<T> = std::result::Result<T, DetectError>;
