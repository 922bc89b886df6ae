//! Agent-facing news tools
//!
//! Thin [`Tool`] wrappers over the aggregator and article fetcher so the
//! stage agents can pull news on demand through the gateway.

use crate::aggregator::NewsAggregator;
use crate::article::ArticleFetcher;
use async_trait::async_trait;
use serde_json::{Value, json};
use signal_core::Error;
use signal_schema::{Field, Schema};
use signal_tools::Tool;
use std::sync::Arc;
use tracing::warn;

/// Tool that fetches recent news articles about a named entity
pub struct EntityNewsTool {
    aggregator: Arc<NewsAggregator>,
    default_max_results: usize,
}

impl EntityNewsTool {
    /// Create the tool over a shared aggregator
    pub fn new(aggregator: Arc<NewsAggregator>, default_max_results: usize) -> Self {
        Self {
            aggregator,
            default_max_results,
        }
    }
}

#[async_trait]
impl Tool for EntityNewsTool {
    async fn execute(&self, params: Value) -> signal_core::Result<Value> {
        let entity_name = params
            .get("entity_name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidParameters("entity_name is required".to_string()))?;

        let num_results = params
            .get("num_results")
            .and_then(Value::as_u64)
            .map_or(self.default_max_results, |n| n as usize);

        let articles = self.aggregator.fetch(entity_name, num_results).await;
        Ok(json!({
            "entity_name": entity_name,
            "articles": articles,
        }))
    }

    fn name(&self) -> &str {
        "get_entity_news"
    }

    fn description(&self) -> &str {
        "Fetch recent news articles about a company or other named entity. \
         Returns title, URL, source, publication time, and description for each article."
    }

    fn input_schema(&self) -> Schema {
        Schema::Object(vec![
            Field::required("entity_name", Schema::String)
                .describe("Name of the company or entity to search news for"),
            Field::optional(
                "num_results",
                Schema::Integer,
                json!(self.default_max_results),
            )
            .describe("Maximum number of articles to return"),
        ])
    }
}

/// Tool that downloads one article and returns its readable text
///
/// Unreachable or unparseable pages are reported inside the payload rather
/// than as an error, so a dead link never aborts an agent loop.
pub struct ArticleContentTool {
    fetcher: Arc<ArticleFetcher>,
}

impl ArticleContentTool {
    /// Create the tool over a shared fetcher
    pub fn new(fetcher: Arc<ArticleFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for ArticleContentTool {
    async fn execute(&self, params: Value) -> signal_core::Result<Value> {
        let url = params
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::InvalidParameters("url is required".to_string()))?;

        match self.fetcher.fetch(url).await {
            Ok(content) => Ok(json!({
                "url": url,
                "title": content.title,
                "content": content.body,
            })),
            Err(e) => {
                warn!(url, error = %e, "article unreachable");
                Ok(json!({
                    "url": url,
                    "unreachable": true,
                    "content": format!("Article could not be retrieved: {e}"),
                }))
            }
        }
    }

    fn name(&self) -> &str {
        "fetch_article_content"
    }

    fn description(&self) -> &str {
        "Download a news article by URL and return its readable text, \
         truncated to a bounded length. Reports unreachable pages in the result."
    }

    fn input_schema(&self) -> Schema {
        Schema::Object(vec![
            Field::required("url", Schema::String).describe("URL of the article to download"),
        ])
    }
}
