//! NewsAPI "everything" endpoint client
//!
//! See: <https://newsapi.org/docs/endpoints/everything>

use crate::error::{NewsError, Result};
use crate::provider::NewsProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use signal_core::NewsArticle;
use std::time::Duration;
use tracing::debug;

use super::gnews::parse_timestamp;
use super::{SharedRateLimiter, rate_limiter};

const NEWSAPI_EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: NewsApiSource,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    #[serde(default)]
    name: String,
}

/// NewsAPI client with rate limiting
pub struct NewsApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: SharedRateLimiter,
}

impl NewsApiProvider {
    /// Create a new NewsAPI client
    ///
    /// # Arguments
    /// * `api_key` - NewsAPI key
    /// * `timeout` - Per-request deadline
    /// * `rate_limit` - Requests per minute
    pub fn new(api_key: impl Into<String>, timeout: Duration, rate_limit: u32) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: NEWSAPI_EVERYTHING_URL.to_string(),
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
impl NewsProvider for NewsApiProvider {
    async fn fetch(&self, entity_name: &str, max_results: usize) -> Result<Vec<NewsArticle>> {
        self.rate_limiter.until_ready().await;

        debug!(entity = entity_name, max_results, "querying NewsAPI");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", entity_name),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", &max_results.to_string()),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Api {
                provider: "newsapi".to_string(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let parsed: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::Malformed(format!("newsapi: {e}")))?;

        if parsed.status != "ok" {
            return Err(NewsError::Api {
                provider: "newsapi".to_string(),
                message: parsed.message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(parsed
            .articles
            .into_iter()
            .map(|article| NewsArticle {
                title: article.title,
                url: article.url,
                source: if article.source.name.is_empty() {
                    "NewsAPI".to_string()
                } else {
                    article.source.name
                },
                published_at: article.published_at.as_deref().and_then(parse_timestamp),
                description: article.description,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "newsapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_surfaces_message() {
        let parsed: NewsApiResponse = serde_json::from_str(
            r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid"}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, "error");
        assert_eq!(parsed.message.as_deref(), Some("Your API key is invalid"));
        assert!(parsed.articles.is_empty());
    }

    #[test]
    fn test_article_decodes() {
        let parsed: NewsApiResponse = serde_json::from_str(
            r#"{"status": "ok", "totalResults": 1, "articles": [{
                "source": {"id": null, "name": "Bloomberg"},
                "title": "TSMC expands capacity",
                "url": "https://example.com/tsmc",
                "publishedAt": "2024-11-07T08:30:00Z",
                "urlToImage": "https://example.com/img.png"
            }]}"#,
        )
        .unwrap();
        assert_eq!(parsed.articles[0].source.name, "Bloomberg");
        assert_eq!(parsed.articles[0].published_at.as_deref(), Some("2024-11-07T08:30:00Z"));
    }
}
