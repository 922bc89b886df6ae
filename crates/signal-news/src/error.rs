//! Error types for news operations

use thiserror::Error;

/// Result type alias for news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Errors from news providers and article fetches
///
/// These are always absorbed at the aggregator boundary; they exist so the
/// absorption can be logged with the real cause.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Provider API returned an application-level error
    #[error("{provider} API error: {message}")]
    Api {
        /// Provider name
        provider: String,
        /// Error detail from the provider
        message: String,
    },

    /// Network or HTTP error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider response could not be decoded
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<NewsError> for signal_core::Error {
    fn from(err: NewsError) -> Self {
        signal_core::Error::ProcessingFailed(err.to_string())
    }
}
