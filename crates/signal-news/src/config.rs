//! Configuration for news aggregation
//!
//! Initialized once at startup and passed explicitly into the aggregator
//! and tools; nothing reads ambient global state.

use crate::error::{NewsError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for news aggregation operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// GNews API key (provider skipped when absent)
    pub gnews_api_key: Option<String>,

    /// NewsAPI key (provider skipped when absent)
    pub newsapi_api_key: Option<String>,

    /// Deadline for each individual provider fetch
    pub provider_timeout: Duration,

    /// Ceiling for one whole aggregate fetch
    pub overall_timeout: Duration,

    /// Deadline for fetching one article body
    pub article_timeout: Duration,

    /// Article count requested when the caller does not specify one
    pub default_max_results: usize,

    /// Per-provider request budget (requests per minute)
    pub rate_limit_per_minute: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            gnews_api_key: None,
            newsapi_api_key: None,
            provider_timeout: Duration::from_secs(30),
            overall_timeout: Duration::from_secs(60),
            article_timeout: Duration::from_secs(10),
            default_max_results: 10,
            rate_limit_per_minute: 60,
        }
    }
}

impl NewsConfig {
    /// Create a new configuration builder
    pub fn builder() -> NewsConfigBuilder {
        NewsConfigBuilder::default()
    }

    /// Load provider API keys from the environment
    ///
    /// Reads `GNEWS_API_KEY` and `NEWSAPI_API_KEY` when set.
    pub fn with_env_api_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("GNEWS_API_KEY") {
            self.gnews_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("NEWSAPI_API_KEY") {
            self.newsapi_api_key = Some(key);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider_timeout > self.overall_timeout {
            return Err(NewsError::Config(format!(
                "provider timeout ({:?}) exceeds the overall fetch ceiling ({:?})",
                self.provider_timeout, self.overall_timeout
            )));
        }
        if self.rate_limit_per_minute == 0 {
            return Err(NewsError::Config(
                "rate_limit_per_minute must be greater than 0".to_string(),
            ));
        }
        if self.default_max_results == 0 {
            return Err(NewsError::Config(
                "default_max_results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`NewsConfig`]
#[derive(Debug, Default)]
pub struct NewsConfigBuilder {
    gnews_api_key: Option<String>,
    newsapi_api_key: Option<String>,
    provider_timeout: Option<Duration>,
    overall_timeout: Option<Duration>,
    article_timeout: Option<Duration>,
    default_max_results: Option<usize>,
    rate_limit_per_minute: Option<u32>,
}

impl NewsConfigBuilder {
    /// Set the GNews API key
    pub fn gnews_api_key(mut self, key: impl Into<String>) -> Self {
        self.gnews_api_key = Some(key.into());
        self
    }

    /// Set the NewsAPI key
    pub fn newsapi_api_key(mut self, key: impl Into<String>) -> Self {
        self.newsapi_api_key = Some(key.into());
        self
    }

    /// Set the per-provider fetch deadline
    pub fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = Some(timeout);
        self
    }

    /// Set the ceiling for one whole aggregate fetch
    pub fn overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = Some(timeout);
        self
    }

    /// Set the article body fetch deadline
    pub fn article_timeout(mut self, timeout: Duration) -> Self {
        self.article_timeout = Some(timeout);
        self
    }

    /// Set the default article count per fetch
    pub fn default_max_results(mut self, max_results: usize) -> Self {
        self.default_max_results = Some(max_results);
        self
    }

    /// Set the per-provider request budget
    pub fn rate_limit_per_minute(mut self, rate_limit: u32) -> Self {
        self.rate_limit_per_minute = Some(rate_limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> NewsConfig {
        let defaults = NewsConfig::default();
        NewsConfig {
            gnews_api_key: self.gnews_api_key,
            newsapi_api_key: self.newsapi_api_key,
            provider_timeout: self.provider_timeout.unwrap_or(defaults.provider_timeout),
            overall_timeout: self.overall_timeout.unwrap_or(defaults.overall_timeout),
            article_timeout: self.article_timeout.unwrap_or(defaults.article_timeout),
            default_max_results: self
                .default_max_results
                .unwrap_or(defaults.default_max_results),
            rate_limit_per_minute: self
                .rate_limit_per_minute
                .unwrap_or(defaults.rate_limit_per_minute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = NewsConfig::default();
        assert_eq!(config.provider_timeout, Duration::from_secs(30));
        assert_eq!(config.overall_timeout, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = NewsConfig::builder()
            .gnews_api_key("key")
            .provider_timeout(Duration::from_millis(50))
            .overall_timeout(Duration::from_millis(200))
            .default_max_results(5)
            .build();
        assert_eq!(config.gnews_api_key.as_deref(), Some("key"));
        assert_eq!(config.default_max_results, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_provider_timeout_above_ceiling_rejected() {
        let config = NewsConfig::builder()
            .provider_timeout(Duration::from_secs(90))
            .build();
        assert!(config.validate().is_err());
    }
}
