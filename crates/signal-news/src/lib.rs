//! Multi-provider news aggregation
//!
//! Fans a fetch-by-entity request out to every configured provider
//! concurrently, bounds each provider with its own timeout, merges whatever
//! the surviving providers returned, and deduplicates by URL. A provider
//! that fails or times out contributes an empty result; it never aborts the
//! aggregate fetch. "No news found" is a valid outcome, not an error.

pub mod aggregator;
pub mod article;
pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod tools;

pub use aggregator::NewsAggregator;
pub use article::ArticleFetcher;
pub use config::NewsConfig;
pub use error::{NewsError, Result};
pub use provider::NewsProvider;
pub use tools::{ArticleContentTool, EntityNewsTool};
