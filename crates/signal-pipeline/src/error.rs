//! Error types for stage execution and pipeline orchestration

use signal_llm::LlmError;
use signal_schema::ValidationError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failure of one stage agent invocation
#[derive(Error, Debug)]
pub enum StageError {
    /// The model call itself failed
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    /// The model's output did not conform to the stage's output schema
    #[error("stage output rejected: {0}")]
    Validation(#[from] ValidationError),

    /// The model finished without producing a decodable payload
    #[error("stage produced no usable output: {0}")]
    NoOutput(String),

    /// The tool-use loop did not converge
    #[error("stage exceeded {0} model iterations")]
    MaxIterations(usize),
}

impl StageError {
    /// Whether this failure means the model boundary is unreachable,
    /// as opposed to one bad response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Llm(e) if e.is_transport())
    }
}

/// Failure of a whole pipeline run
///
/// Per-entity stage failures in the fan-out are absorbed into the result
/// and never appear here; this type covers only run-level outcomes.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The enrichment stage failed, so there are no entities to fan out over
    #[error("entity enrichment failed for '{company}': {source}")]
    Enrichment {
        /// The company that was being analyzed
        company: String,
        /// The underlying stage failure
        #[source]
        source: StageError,
    },

    /// Enrichment succeeded but discovered no related entities
    #[error("no related entities found for '{0}'")]
    NoEntities(String),

    /// The model or tool boundary is unreachable; no partial result is kept
    #[error("upstream boundary unreachable: {0}")]
    Transport(String),
}
