//! Concurrent multi-provider aggregation
//!
//! The heart of the news layer: one fetch fans out to every configured
//! provider at once, each bounded by the per-provider timeout, with the
//! overall ceiling as a backstop. Merge order follows provider priority
//! (the order providers were registered), so deduplication keeps the
//! higher-priority provider's record for a shared URL.

use crate::config::NewsConfig;
use crate::provider::NewsProvider;
use futures::future::join_all;
use signal_core::NewsArticle;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Aggregates articles from several independent, unreliable providers
pub struct NewsAggregator {
    providers: Vec<Arc<dyn NewsProvider>>,
    provider_timeout: Duration,
    overall_timeout: Duration,
}

impl NewsAggregator {
    /// Create an aggregator over `providers` in priority order
    pub fn new(providers: Vec<Arc<dyn NewsProvider>>, config: &NewsConfig) -> Self {
        Self {
            providers,
            provider_timeout: config.provider_timeout.min(config.overall_timeout),
            overall_timeout: config.overall_timeout,
        }
    }

    /// Number of configured providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Fetch up to `max_results` articles about `entity_name`
    ///
    /// Never fails: a provider that errors or times out contributes an
    /// empty result and is logged. When every provider fails the result is
    /// an empty list; downstream stages treat "no news found" as a valid,
    /// common outcome.
    pub async fn fetch(&self, entity_name: &str, max_results: usize) -> Vec<NewsArticle> {
        let fetches = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let entity = entity_name.to_string();
            let deadline = self.provider_timeout;
            async move {
                match tokio::time::timeout(deadline, provider.fetch(&entity, max_results)).await {
                    Ok(Ok(articles)) => {
                        debug!(
                            provider = provider.name(),
                            entity = %entity,
                            count = articles.len(),
                            "provider responded"
                        );
                        articles
                    }
                    Ok(Err(e)) => {
                        warn!(provider = provider.name(), entity = %entity, error = %e, "provider failed");
                        Vec::new()
                    }
                    Err(_) => {
                        warn!(
                            provider = provider.name(),
                            entity = %entity,
                            timeout = ?deadline,
                            "provider timed out"
                        );
                        Vec::new()
                    }
                }
            }
        });

        // join_all yields results in provider registration order, which is
        // what makes the dedup below priority-preserving.
        let per_provider =
            match tokio::time::timeout(self.overall_timeout, join_all(fetches)).await {
                Ok(results) => results,
                Err(_) => {
                    warn!(entity = entity_name, ceiling = ?self.overall_timeout, "aggregate fetch hit overall ceiling");
                    return Vec::new();
                }
            };

        let merged: Vec<NewsArticle> = per_provider.into_iter().flatten().collect();
        let mut articles = dedup_by_url(merged);
        articles.truncate(max_results);

        info!(
            entity = entity_name,
            count = articles.len(),
            "aggregate fetch complete"
        );
        articles
    }
}

/// Keep the first occurrence of each URL (first = highest-priority provider)
fn dedup_by_url(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(url_key(&article.url)))
        .collect()
}

/// Canonical dedup key: parsed URL when possible, trimmed string otherwise
fn url_key(raw: &str) -> String {
    match Url::parse(raw.trim()) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsError;
    use async_trait::async_trait;

    fn article(url: &str, source: &str) -> NewsArticle {
        NewsArticle {
            title: format!("article at {url}"),
            url: url.to_string(),
            source: source.to_string(),
            published_at: None,
            description: None,
        }
    }

    /// Provider scripted with a fixed outcome and an optional delay
    struct ScriptedProvider {
        name: &'static str,
        delay: Duration,
        outcome: Result<Vec<NewsArticle>, &'static str>,
    }

    impl ScriptedProvider {
        fn returning(name: &'static str, articles: Vec<NewsArticle>) -> Arc<Self> {
            Arc::new(Self {
                name,
                delay: Duration::ZERO,
                outcome: Ok(articles),
            })
        }

        fn failing(name: &'static str, message: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                delay: Duration::ZERO,
                outcome: Err(message),
            })
        }

        fn slow(name: &'static str, delay: Duration, articles: Vec<NewsArticle>) -> Arc<Self> {
            Arc::new(Self {
                name,
                delay,
                outcome: Ok(articles),
            })
        }
    }

    #[async_trait]
    impl NewsProvider for ScriptedProvider {
        async fn fetch(
            &self,
            _entity_name: &str,
            _max_results: usize,
        ) -> crate::Result<Vec<NewsArticle>> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.outcome {
                Ok(articles) => Ok(articles.clone()),
                Err(message) => Err(NewsError::Api {
                    provider: self.name.to_string(),
                    message: (*message).to_string(),
                }),
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn fast_config() -> NewsConfig {
        NewsConfig::builder()
            .provider_timeout(Duration::from_millis(50))
            .overall_timeout(Duration::from_millis(200))
            .build()
    }

    #[tokio::test]
    async fn test_merges_results_in_priority_order() {
        let aggregator = NewsAggregator::new(
            vec![
                ScriptedProvider::returning("a", vec![article("https://example.com/u1", "A")]),
                ScriptedProvider::returning(
                    "b",
                    vec![
                        article("https://example.com/u1", "B"),
                        article("https://example.com/u2", "B"),
                    ],
                ),
            ],
            &fast_config(),
        );

        let articles = aggregator.fetch("TSMC", 10).await;
        assert_eq!(articles.len(), 2);
        // u1 deduplicated in favor of the higher-priority provider
        assert_eq!(articles[0].url, "https://example.com/u1");
        assert_eq!(articles[0].source, "A");
        assert_eq!(articles[1].url, "https://example.com/u2");
    }

    #[tokio::test]
    async fn test_failing_provider_contributes_empty_result() {
        let aggregator = NewsAggregator::new(
            vec![
                ScriptedProvider::failing("a", "quota exhausted"),
                ScriptedProvider::returning("b", vec![article("https://example.com/u2", "B")]),
            ],
            &fast_config(),
        );

        let articles = aggregator.fetch("TSMC", 10).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "B");
    }

    #[tokio::test]
    async fn test_slow_provider_is_timed_out_not_waited_for() {
        let aggregator = NewsAggregator::new(
            vec![
                ScriptedProvider::slow(
                    "a",
                    Duration::from_secs(5),
                    vec![article("https://example.com/late", "A")],
                ),
                ScriptedProvider::returning("b", vec![article("https://example.com/u2", "B")]),
            ],
            &fast_config(),
        );

        let started = std::time::Instant::now();
        let articles = aggregator.fetch("TSMC", 10).await;
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://example.com/u2");
    }

    #[tokio::test]
    async fn test_all_providers_failing_yields_empty_success() {
        let aggregator = NewsAggregator::new(
            vec![
                ScriptedProvider::failing("a", "down"),
                ScriptedProvider::failing("b", "down"),
            ],
            &fast_config(),
        );

        let articles = aggregator.fetch("TSMC", 10).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_no_providers_yields_empty_success() {
        let aggregator = NewsAggregator::new(vec![], &fast_config());
        assert!(aggregator.fetch("TSMC", 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_truncates_to_max_results() {
        let many: Vec<NewsArticle> = (0..20)
            .map(|i| article(&format!("https://example.com/{i}"), "A"))
            .collect();
        let aggregator = NewsAggregator::new(
            vec![ScriptedProvider::returning("a", many)],
            &fast_config(),
        );

        let articles = aggregator.fetch("TSMC", 5).await;
        assert_eq!(articles.len(), 5);
    }

    #[test]
    fn test_url_key_normalizes_equivalent_urls() {
        assert_eq!(
            url_key(" https://example.com/a "),
            url_key("https://example.com/a")
        );
        // Unparseable URLs fall back to the trimmed string
        assert_eq!(url_key(" not a url "), "not a url");
    }
}
