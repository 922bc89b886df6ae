//! Error types for LLM operations

use thiserror::Error;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur at the model-invocation boundary
#[derive(Error, Debug)]
pub enum LlmError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("invalid API key or authentication failed")]
    AuthenticationFailed,

    /// Rate limit exceeded
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Model not found
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected response format
    #[error("unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl LlmError {
    /// Whether the failure means the boundary is unreachable rather than a
    /// bad individual request
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::AuthenticationFailed | Self::Configuration(_)
        )
    }
}
