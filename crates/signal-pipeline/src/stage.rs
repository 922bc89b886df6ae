//! Stage agent runner
//!
//! One stage is one model call bound to instructions, an output schema, and
//! a tool set. The runner drives the loop: call the model, service any tool
//! requests through the gateway, resubmit, and validate the final payload
//! against the stage's output schema. A stage is stateless between
//! invocations; all state lives in the conversation built per run.

use crate::error::StageError;
use serde_json::Value;
use signal_llm::{
    CompletionRequest, ContentBlock, LlmProvider, Message, StopReason, ToolDefinition,
};
use signal_schema::Schema;
use signal_tools::ToolGateway;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tunables shared by every stage invocation
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Model identifier passed to the provider
    pub model: String,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// Cap on model round-trips per stage (prevents tool-use loops)
    pub max_iterations: usize,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 4096,
            temperature: 0.2,
            max_iterations: 10,
        }
    }
}

/// Drives one stage agent: model loop, tool servicing, output validation
pub struct StageRunner {
    provider: Arc<dyn LlmProvider>,
    gateway: ToolGateway,
    config: StageConfig,
}

impl StageRunner {
    /// Create a runner over a model provider and a tool gateway
    pub fn new(provider: Arc<dyn LlmProvider>, gateway: ToolGateway, config: StageConfig) -> Self {
        Self {
            provider,
            gateway,
            config,
        }
    }

    /// The gateway this runner services tool calls through
    pub fn gateway(&self) -> &ToolGateway {
        &self.gateway
    }

    /// Run one stage to a validated output
    ///
    /// `tool_names` selects which gateway tools this stage may call; the
    /// final model payload is validated against `output_schema` before
    /// being returned. Validation failures are not retried.
    pub async fn run(
        &self,
        stage: &str,
        instructions: &str,
        input: &Value,
        output_schema: &Schema,
        tool_names: &[&str],
    ) -> Result<Value, StageError> {
        let tools = self.tool_definitions(tool_names);
        let mut conversation = vec![Message::user(input.to_string())];
        let mut iteration = 0;

        loop {
            iteration += 1;
            if iteration > self.config.max_iterations {
                warn!(stage, iteration, "stage exceeded iteration cap");
                return Err(StageError::MaxIterations(self.config.max_iterations));
            }

            debug!(
                stage,
                iteration,
                tool_count = tools.len(),
                "stage iteration started"
            );

            let mut builder = CompletionRequest::builder(&self.config.model)
                .messages(conversation.clone())
                .system(instructions)
                .max_tokens(self.config.max_tokens)
                .temperature(self.config.temperature)
                .json_output(true);
            if !tools.is_empty() {
                builder = builder.tools(tools.clone());
            }

            let response = self.provider.complete(builder.build()).await?;
            info!(
                stage,
                iteration,
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "model response received"
            );

            conversation.push(response.message.clone());

            match response.stop_reason {
                StopReason::EndTurn => {
                    let text = response.message.text().unwrap_or_default();
                    let payload = extract_json(text).ok_or_else(|| {
                        StageError::NoOutput(format!(
                            "stage '{stage}' response carried no JSON object"
                        ))
                    })?;
                    let validated = signal_schema::validate(output_schema, &payload)?;
                    info!(stage, iteration, "stage completed");
                    return Ok(validated);
                }

                StopReason::ToolUse => {
                    let results = self.service_tool_calls(stage, &response.message).await;
                    if results.is_empty() {
                        warn!(stage, "tool-use stop reason with no tool calls");
                        return Err(StageError::NoOutput(format!(
                            "stage '{stage}' requested tool use but named no tool"
                        )));
                    }
                    conversation.extend(results);
                }

                StopReason::MaxTokens => {
                    warn!(stage, "response truncated at max tokens");
                    return Err(StageError::NoOutput(format!(
                        "stage '{stage}' response truncated at {} tokens",
                        self.config.max_tokens
                    )));
                }
            }
        }
    }

    /// Service every tool request in `message` through the gateway
    ///
    /// The gateway never raises, so each call produces a tool-result
    /// message; a failed tool comes back as a serialized error object the
    /// model can react to.
    async fn service_tool_calls(&self, stage: &str, message: &Message) -> Vec<Message> {
        let mut results = Vec::new();
        for block in message.tool_uses() {
            if let ContentBlock::ToolUse { id, name, input } = block {
                info!(stage, tool = %name, "servicing tool call");
                let payload = self.gateway.invoke(name, input.clone()).await;
                results.push(Message::tool_result(id.clone(), payload));
            }
        }
        results
    }

    fn tool_definitions(&self, tool_names: &[&str]) -> Vec<ToolDefinition> {
        self.gateway
            .specs()
            .into_iter()
            .filter(|spec| tool_names.contains(&spec.name.as_str()))
            .map(|spec| ToolDefinition::new(spec.name, spec.description, spec.input_schema))
            .collect()
    }
}

/// Pull the JSON object out of a model response
///
/// Handles the common shapes: a bare object, an object wrapped in a
/// markdown code fence, or an object embedded in surrounding prose.
pub(crate) fn extract_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    // Code fence: take what's between the first fence line and the closing fence
    if let Some(rest) = trimmed.strip_prefix("```") {
        let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
        let body = body.rsplit_once("```").map_or(body, |(body, _)| body);
        if let Ok(value) = serde_json::from_str::<Value>(body.trim()) {
            return Some(value);
        }
    }

    // Embedded object: widest braces-delimited slice that parses
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if start < end {
        if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
            return Some(value);
        }
    }
    None
}
