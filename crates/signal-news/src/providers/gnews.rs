//! GNews search API client
//!
//! See: <https://gnews.io/docs/v4>

use crate::error::{NewsError, Result};
use crate::provider::NewsProvider;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use signal_core::NewsArticle;
use std::time::Duration;
use tracing::debug;

use super::{SharedRateLimiter, rate_limiter};

const GNEWS_SEARCH_URL: &str = "https://gnews.io/api/v4/search";

/// GNews article record as returned by `/api/v4/search`
#[derive(Debug, Deserialize)]
struct GNewsArticle {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: GNewsSource,
}

#[derive(Debug, Deserialize)]
struct GNewsSource {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    #[serde(default)]
    articles: Vec<GNewsArticle>,
}

/// GNews client with rate limiting
pub struct GNewsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: SharedRateLimiter,
}

impl GNewsProvider {
    /// Create a new GNews client
    ///
    /// # Arguments
    /// * `api_key` - GNews API key
    /// * `timeout` - Per-request deadline
    /// * `rate_limit` - Requests per minute
    pub fn new(api_key: impl Into<String>, timeout: Duration, rate_limit: u32) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: GNEWS_SEARCH_URL.to_string(),
            rate_limiter: rate_limiter(rate_limit),
        })
    }

    /// Point the client at a custom endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NewsProvider for GNewsProvider {
    async fn fetch(&self, entity_name: &str, max_results: usize) -> Result<Vec<NewsArticle>> {
        self.rate_limiter.until_ready().await;

        debug!(entity = entity_name, max_results, "querying GNews");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", entity_name),
                ("lang", "en"),
                ("max", &max_results.to_string()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Api {
                provider: "gnews".to_string(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let parsed: GNewsResponse = response
            .json()
            .await
            .map_err(|e| NewsError::Malformed(format!("gnews: {e}")))?;

        Ok(parsed
            .articles
            .into_iter()
            .map(|article| NewsArticle {
                title: article.title,
                url: article.url,
                source: if article.source.name.is_empty() {
                    "GNews".to_string()
                } else {
                    article.source.name
                },
                published_at: article.published_at.as_deref().and_then(parse_timestamp),
                description: article.description,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "gnews"
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2024-11-07T08:30:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-11-07T08:30:00+00:00");
        assert!(parse_timestamp("last Tuesday").is_none());
    }

    #[test]
    fn test_gnews_response_decodes_with_missing_fields() {
        let parsed: GNewsResponse = serde_json::from_str(
            r#"{"totalArticles": 1, "articles": [{"url": "https://example.com/a", "source": {"name": "Reuters"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.articles.len(), 1);
        assert!(parsed.articles[0].title.is_empty());
        assert_eq!(parsed.articles[0].source.name, "Reuters");
    }
}
