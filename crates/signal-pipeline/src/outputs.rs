//! Stage output contracts
//!
//! Each stage declares its output shape as a [`Schema`] value; the raw
//! model payload is validated against it before being decoded into the
//! typed form. The schemas here are the single chokepoint between
//! untrusted model output and the data model in `signal-core`.

use serde::{Deserialize, Serialize};
use signal_core::{NewsArticle, RelatedEntity, SentimentToken};
use signal_schema::{Field, Schema};

/// Relationship variants accepted from the enrichment stage
const RELATIONSHIP_TYPES: [&str; 6] = [
    "competitor",
    "supplier",
    "executive",
    "partner",
    "investor",
    "customer",
];

/// Validated output of the entity enrichment stage
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentOutput {
    /// The company the model was asked about
    pub company_name: String,
    /// Related entities, at least one
    pub entities: Vec<RelatedEntity>,
}

/// Validated output of the news aggregation stage
///
/// Doubles as the sentiment stage's input, so it serializes too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityWithNews {
    /// The entity carried through from enrichment, unchanged
    #[serde(flatten)]
    pub entity: RelatedEntity,
    /// Articles attached by the stage (may be empty)
    pub articles: Vec<NewsArticle>,
}

/// Validated output of the sentiment analysis stage
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentOutput {
    /// Scored signals for the entity's articles
    pub sentiment_tokens: Vec<SentimentToken>,
}

fn related_entity_fields() -> Vec<Field> {
    vec![
        Field::required("entity_name", Schema::String),
        Field::required(
            "relationship_type",
            Schema::Enum(RELATIONSHIP_TYPES.to_vec()),
        ),
        Field::required("relationship_strength", Schema::number_in(0.0, 1.0)),
    ]
}

fn article_schema() -> Schema {
    Schema::Object(vec![
        Field::optional("title", Schema::String, serde_json::Value::String(String::new())),
        Field::required("url", Schema::String),
        Field::required("source", Schema::String),
        Field::omittable("published_at", Schema::String),
        Field::omittable("description", Schema::String),
    ])
}

/// Schema for [`EnrichmentOutput`]
///
/// Requires at least one entity: a model that finds nothing must fail
/// validation here rather than silently produce an empty report.
pub fn enrichment_schema() -> Schema {
    Schema::Object(vec![
        Field::required("company_name", Schema::String),
        Field::required(
            "entities",
            Schema::array_min(Schema::Object(related_entity_fields()), 1),
        ),
    ])
}

/// Schema for [`EntityWithNews`]
pub fn entity_with_news_schema() -> Schema {
    let mut fields = related_entity_fields();
    fields.push(Field::required("articles", Schema::array(article_schema())));
    Schema::Object(fields)
}

/// Schema for [`SentimentOutput`]
pub fn sentiment_schema() -> Schema {
    Schema::Object(vec![Field::required(
        "sentiment_tokens",
        Schema::array(Schema::Object(vec![
            Field::required("token_text", Schema::String).alias("tokenText"),
            Field::required("impact", Schema::Enum(vec!["positive", "negative", "neutral"])),
            Field::required(
                "direction",
                Schema::Enum(vec!["bullish", "bearish", "neutral"]),
            ),
            Field::required("strength", Schema::number_in(0.0, 1.0)),
        ])),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use signal_core::{Direction, Impact, RelationshipType};
    use signal_schema::{ValidationError, parse_validated};

    #[test]
    fn test_enrichment_output_decodes() {
        let payload = json!({
            "company_name": "Apple",
            "entities": [
                { "entity_name": "TSMC", "relationship_type": "supplier", "relationship_strength": 0.95 }
            ]
        });
        let output: EnrichmentOutput =
            parse_validated(&enrichment_schema(), &payload).expect("conforming payload");
        assert_eq!(output.company_name, "Apple");
        assert_eq!(output.entities[0].relationship_type, RelationshipType::Supplier);
    }

    #[test]
    fn test_enrichment_requires_at_least_one_entity() {
        let payload = json!({ "company_name": "Apple", "entities": [] });
        let err = parse_validated::<EnrichmentOutput>(&enrichment_schema(), &payload)
            .expect_err("zero entities must fail validation");
        assert!(matches!(err, ValidationError::TooFewItems { .. }));
        assert_eq!(err.path(), "entities");
    }

    #[test]
    fn test_out_of_range_strength_rejected_not_clamped() {
        let payload = json!({
            "company_name": "Apple",
            "entities": [
                { "entity_name": "TSMC", "relationship_type": "supplier", "relationship_strength": 1.5 }
            ]
        });
        let err = parse_validated::<EnrichmentOutput>(&enrichment_schema(), &payload)
            .expect_err("strength above 1.0 must fail");
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(err.path(), "entities[0].relationship_strength");
    }

    #[test]
    fn test_entity_with_news_allows_empty_articles() {
        let payload = json!({
            "entity_name": "TSMC",
            "relationship_type": "supplier",
            "relationship_strength": 0.95,
            "articles": []
        });
        let output: EntityWithNews =
            parse_validated(&entity_with_news_schema(), &payload).expect("empty articles valid");
        assert!(output.articles.is_empty());
    }

    #[test]
    fn test_sentiment_accepts_token_text_alias() {
        let payload = json!({
            "sentiment_tokens": [
                { "tokenText": "capacity expansion", "impact": "positive", "direction": "bullish", "strength": 0.8 }
            ]
        });
        let output: SentimentOutput =
            parse_validated(&sentiment_schema(), &payload).expect("alias accepted");
        assert_eq!(output.sentiment_tokens[0].token_text, "capacity expansion");
        assert_eq!(output.sentiment_tokens[0].impact, Impact::Positive);
        assert_eq!(output.sentiment_tokens[0].direction, Direction::Bullish);
    }

    #[test]
    fn test_unknown_relationship_type_rejected() {
        let payload = json!({
            "company_name": "Apple",
            "entities": [
                { "entity_name": "X", "relationship_type": "rival", "relationship_strength": 0.5 }
            ]
        });
        let err = parse_validated::<EnrichmentOutput>(&enrichment_schema(), &payload)
            .expect_err("unknown variant must fail");
        assert_eq!(err.path(), "entities[0].relationship_type");
    }
}
