//! Error types shared across the tool boundary

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool and agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Tool received parameters that do not match its declared schema
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A tool name was registered twice
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),

    /// Tool or agent processing failed
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// An external call did not complete within its deadline
    #[error("timed out: {0}")]
    Timeout(String),
}
