//! Domain model and core error types for trader-signals-rs
//!
//! This crate defines the data model shared by every stage of the signal
//! pipeline: related entities discovered for a target company, the news
//! articles fetched for them, and the sentiment tokens scored from those
//! articles.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Direction, EntityReport, Impact, NewsArticle, PipelineResult, RelatedEntity, RelationshipType,
    SentimentToken,
};
