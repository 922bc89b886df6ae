//! Pipeline orchestration
//!
//! Linear pipeline with per-entity fan-out: enrichment first, then one
//! independent news → sentiment branch per discovered entity, run
//! concurrently. Branch completions are assembled in entity-discovery
//! order, never completion order. Dropping the future returned by
//! [`Pipeline::run`] cancels every in-flight branch.

use crate::error::{PipelineError, Result, StageError};
use crate::outputs::{
    EnrichmentOutput, EntityWithNews, SentimentOutput, enrichment_schema, entity_with_news_schema,
    sentiment_schema,
};
use crate::prompts;
use crate::stage::StageRunner;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use signal_core::{EntityReport, PipelineResult, RelatedEntity};
use signal_schema::ValidationError;
use tracing::{info, warn};

/// Outcome of one entity's news → sentiment branch
enum BranchOutcome {
    /// Both stages produced validated output
    Complete(EntityReport),
    /// News succeeded but sentiment failed; report kept without tokens
    Partial(EntityReport),
    /// News stage failed; the entity is omitted from the result
    Omitted(String),
}

/// Sequences the three stage agents over one company
pub struct Pipeline {
    runner: StageRunner,
}

impl Pipeline {
    /// Create a pipeline over a configured stage runner
    pub fn new(runner: StageRunner) -> Self {
        Self { runner }
    }

    /// Analyze `company_name` end to end
    ///
    /// Fails only at the run level: enrichment failure, no entities found,
    /// or an unreachable upstream boundary. Individual branch failures are
    /// absorbed: a failed news stage omits that entity, a failed sentiment
    /// stage keeps the entity's articles without tokens.
    pub async fn run(&self, company_name: &str) -> Result<PipelineResult> {
        info!(company = company_name, "pipeline started");
        let enrichment = self.enrich(company_name).await?;
        info!(
            company = company_name,
            entity_count = enrichment.entities.len(),
            "enrichment complete"
        );

        let branches = enrichment
            .entities
            .into_iter()
            .map(|entity| self.run_branch(entity));
        // join_all preserves input order: the assembled result follows
        // entity-discovery order regardless of branch completion order.
        let outcomes = join_all(branches).await;

        let mut entities = Vec::new();
        for outcome in outcomes {
            match outcome? {
                BranchOutcome::Complete(report) | BranchOutcome::Partial(report) => {
                    entities.push(report);
                }
                BranchOutcome::Omitted(entity_name) => {
                    warn!(entity = %entity_name, "entity omitted from result");
                }
            }
        }

        info!(
            company = company_name,
            entity_count = entities.len(),
            "pipeline complete"
        );
        Ok(PipelineResult {
            company_name: company_name.to_string(),
            entities,
        })
    }

    /// Run the enrichment stage
    async fn enrich(&self, company_name: &str) -> Result<EnrichmentOutput> {
        let input = json!({ "company_name": company_name });
        let payload = self
            .runner
            .run(
                "enrichment",
                prompts::ENTITY_ENRICHMENT,
                &input,
                &enrichment_schema(),
                &[],
            )
            .await
            .map_err(|e| map_enrichment_error(company_name, e))?;

        decode(&payload).map_err(|e| PipelineError::Enrichment {
            company: company_name.to_string(),
            source: e,
        })
    }

    /// Run one entity's news → sentiment branch
    ///
    /// Transport failures escalate to the run level; everything else is
    /// absorbed into the branch outcome.
    async fn run_branch(&self, entity: RelatedEntity) -> Result<BranchOutcome> {
        let entity_name = entity.entity_name.clone();

        let with_news = match self.fetch_news(&entity).await {
            Ok(with_news) => with_news,
            Err(e) if e.is_transport() => {
                return Err(PipelineError::Transport(e.to_string()));
            }
            Err(e) => {
                warn!(entity = %entity_name, error = %e, "news stage failed");
                return Ok(BranchOutcome::Omitted(entity_name));
            }
        };

        // No articles means nothing to score; the entity still appears in
        // the result with an empty report.
        if with_news.articles.is_empty() {
            info!(entity = %entity_name, "no articles found");
            return Ok(BranchOutcome::Complete(EntityReport::with_articles(
                entity,
                Vec::new(),
            )));
        }

        match self.score_sentiment(&with_news).await {
            Ok(sentiment) => Ok(BranchOutcome::Complete(EntityReport {
                entity,
                articles: with_news.articles,
                sentiment_tokens: sentiment.sentiment_tokens,
            })),
            Err(e) if e.is_transport() => Err(PipelineError::Transport(e.to_string())),
            Err(e) => {
                warn!(entity = %entity_name, error = %e, "sentiment stage failed, keeping articles");
                Ok(BranchOutcome::Partial(EntityReport::with_articles(
                    entity,
                    with_news.articles,
                )))
            }
        }
    }

    /// Run the news aggregation stage for one entity
    async fn fetch_news(&self, entity: &RelatedEntity) -> std::result::Result<EntityWithNews, StageError> {
        let input = serde_json::to_value(entity)
            .map_err(|e| StageError::NoOutput(format!("entity not serializable: {e}")))?;
        let payload = self
            .runner
            .run(
                "news",
                prompts::NEWS_AGGREGATION,
                &input,
                &entity_with_news_schema(),
                &["get_entity_news"],
            )
            .await?;
        decode(&payload)
    }

    /// Run the sentiment analysis stage for one entity and its articles
    async fn score_sentiment(
        &self,
        with_news: &EntityWithNews,
    ) -> std::result::Result<SentimentOutput, StageError> {
        let input = serde_json::to_value(with_news)
            .map_err(|e| StageError::NoOutput(format!("stage input not serializable: {e}")))?;
        let payload = self
            .runner
            .run(
                "sentiment",
                prompts::SENTIMENT_ANALYSIS,
                &input,
                &sentiment_schema(),
                &["fetch_article_content"],
            )
            .await?;
        decode(&payload)
    }
}

/// Decode a payload the stage runner already validated
fn decode<T: DeserializeOwned>(payload: &Value) -> std::result::Result<T, StageError> {
    serde_json::from_value(payload.clone())
        .map_err(|e| StageError::Validation(ValidationError::Decode(e.to_string())))
}

/// Distinguish "no related entities found" from every other enrichment failure
fn map_enrichment_error(company: &str, error: StageError) -> PipelineError {
    if error.is_transport() {
        return PipelineError::Transport(error.to_string());
    }
    if let StageError::Validation(ValidationError::TooFewItems { ref path, .. }) = error {
        if path == "entities" {
            return PipelineError::NoEntities(company.to_string());
        }
    }
    PipelineError::Enrichment {
        company: company.to_string(),
        source: error,
    }
}
