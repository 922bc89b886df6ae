//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for model providers
///
/// Implementations provide access to a concrete model service. The pipeline
/// only ever talks to this trait, so tests drive it with scripted fakes.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from the model
    ///
    /// Implementations must bound the call with a timeout; there is no
    /// unbounded wait anywhere in the pipeline.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g. "openai")
    fn name(&self) -> &str;
}
