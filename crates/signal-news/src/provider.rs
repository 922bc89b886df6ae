//! News provider trait

use crate::Result;
use async_trait::async_trait;
use signal_core::NewsArticle;

/// Trait for one external news source
///
/// Implementations are treated as untrusted and partial: the aggregator
/// bounds every call with its own timeout and absorbs any error.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `max_results` recent articles mentioning `entity_name`
    async fn fetch(&self, entity_name: &str, max_results: usize) -> Result<Vec<NewsArticle>>;

    /// Provider name as logged and reported in article sourcing
    fn name(&self) -> &str;
}
