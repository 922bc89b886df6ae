//! Data model for the signal pipeline
//!
//! Every type here is immutable once created: stages hand validated values
//! down the pipeline and never mutate what an upstream stage produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a related entity is connected to the target company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    /// Competes in the same market
    Competitor,
    /// Supplies components or services
    Supplier,
    /// Officer of the target company (CEO, CFO, ...)
    Executive,
    /// Strategic partner
    Partner,
    /// Significant shareholder
    Investor,
    /// Major customer
    Customer,
}

impl RelationshipType {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Competitor => "competitor",
            Self::Supplier => "supplier",
            Self::Executive => "executive",
            Self::Partner => "partner",
            Self::Investor => "investor",
            Self::Customer => "customer",
        }
    }
}

/// A company, person, or organization related to the target company
///
/// Produced by the entity enrichment stage. `relationship_strength` is
/// always in `[0.0, 1.0]`; values outside the range are rejected at the
/// validation boundary rather than clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedEntity {
    /// Name of the related entity
    pub entity_name: String,

    /// How the entity is connected to the target company
    pub relationship_type: RelationshipType,

    /// Strength of the relationship, 0.0 to 1.0
    pub relationship_strength: f64,
}

/// One news article fetched from a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline
    #[serde(default)]
    pub title: String,

    /// Canonical article URL, unique within one entity's article list
    pub url: String,

    /// Name of the outlet that published the article
    pub source: String,

    /// Publication timestamp, when the provider supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Short summary or leading text, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Effect of a news event on the target company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// Trading signal direction implied by a news event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

/// One scored signal extracted from article content
///
/// The upstream model emits `tokenText` in some responses, so the text
/// field accepts that alias at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentToken {
    /// Key phrase or event from the news
    #[serde(alias = "tokenText")]
    pub token_text: String,

    /// Effect on the target company
    pub impact: Impact,

    /// Implied trading direction
    pub direction: Direction,

    /// Signal strength, 0.0 to 1.0
    pub strength: f64,
}

/// Aggregate result for one related entity
///
/// Articles are ordered by provider priority; tokens only ever reference
/// articles present in this report's own article list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    /// The related entity this report covers
    #[serde(flatten)]
    pub entity: RelatedEntity,

    /// Articles fetched for the entity (may be empty)
    pub articles: Vec<NewsArticle>,

    /// Sentiment tokens scored from the articles
    pub sentiment_tokens: Vec<SentimentToken>,
}

impl EntityReport {
    /// Report with articles but no sentiment yet
    pub fn with_articles(entity: RelatedEntity, articles: Vec<NewsArticle>) -> Self {
        Self {
            entity,
            articles,
            sentiment_tokens: Vec::new(),
        }
    }
}

/// Final pipeline output for one target company
///
/// `entities` preserves the order in which the enrichment stage discovered
/// the related entities, regardless of which fan-out branch finished first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The company that was analyzed
    pub company_name: String,

    /// Per-entity reports in discovery order
    pub entities: Vec<EntityReport>,
}

impl PipelineResult {
    /// Total sentiment tokens across all entity reports
    pub fn token_count(&self) -> usize {
        self.entities.iter().map(|e| e.sentiment_tokens.len()).sum()
    }

    /// Total articles across all entity reports
    pub fn article_count(&self) -> usize {
        self.entities.iter().map(|e| e.articles.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entity() -> RelatedEntity {
        RelatedEntity {
            entity_name: "TSMC".to_string(),
            relationship_type: RelationshipType::Supplier,
            relationship_strength: 0.95,
        }
    }

    #[test]
    fn test_relationship_type_roundtrip() {
        let json = serde_json::to_string(&RelationshipType::Supplier).unwrap();
        assert_eq!(json, "\"supplier\"");
        let back: RelationshipType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RelationshipType::Supplier);
    }

    #[test]
    fn test_entity_report_flattens_entity_fields() {
        let report = EntityReport::with_articles(sample_entity(), vec![]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["entity_name"], "TSMC");
        assert_eq!(value["relationship_type"], "supplier");
        assert!(value["articles"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_sentiment_token_accepts_camel_case_alias() {
        let token: SentimentToken = serde_json::from_value(serde_json::json!({
            "tokenText": "TSMC expands production capacity",
            "impact": "positive",
            "direction": "bullish",
            "strength": 0.75
        }))
        .unwrap();
        assert_eq!(token.token_text, "TSMC expands production capacity");
        assert_eq!(token.impact, Impact::Positive);
        assert_eq!(token.direction, Direction::Bullish);
    }

    #[test]
    fn test_pipeline_result_counts() {
        let result = PipelineResult {
            company_name: "Apple".to_string(),
            entities: vec![EntityReport {
                entity: sample_entity(),
                articles: vec![NewsArticle {
                    title: "TSMC expands".to_string(),
                    url: "https://example.com/a".to_string(),
                    source: "Reuters".to_string(),
                    published_at: None,
                    description: None,
                }],
                sentiment_tokens: vec![SentimentToken {
                    token_text: "capacity expansion".to_string(),
                    impact: Impact::Positive,
                    direction: Direction::Bullish,
                    strength: 0.7,
                }],
            }],
        };
        assert_eq!(result.article_count(), 1);
        assert_eq!(result.token_count(), 1);
    }
}
