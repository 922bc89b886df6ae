//! OpenAI provider implementation
//!
//! Implements [`LlmProvider`] against the chat-completions API.
//! See: <https://platform.openai.com/docs/api-reference/chat>
//!
//! Also works with OpenAI-compatible endpoints (local deployments, Azure)
//! through a custom `api_base`.

use crate::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmError, LlmProvider, Message,
    MessageContent, Result, Role, StopReason, TokenUsage, ToolDefinition,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API (default: "https://api.openai.com/v1")
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    ///
    /// This is the per-model-invocation deadline; every completion the
    /// pipeline issues is bounded by it.
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from the `OPENAI_API_KEY` environment variable
    ///
    /// Optionally reads the base URL from `OPENAI_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            LlmError::Configuration("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// OpenAI provider
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    /// Create a provider with custom configuration
    pub fn with_config(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a provider with an API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(OpenAiConfig::new(api_key))
    }

    /// Create a provider from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        Self::with_config(OpenAiConfig::from_env()?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!(
            model = %request.model,
            api_base = %self.config.api_base,
            "sending completion request"
        );

        let wire_request = WireRequest {
            model: request.model.clone(),
            messages: build_wire_messages(request.system, request.messages),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            tools: request.tools.as_deref().map(convert_tools),
            response_format: request.json_output.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimitExceeded(error_text),
                400 => LlmError::InvalidRequest(error_text),
                404 => LlmError::ModelNotFound(request.model),
                _ => LlmError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::UnexpectedResponse(format!("failed to parse response: {e}")))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::UnexpectedResponse("no choices in response".to_string()))?;

        debug!(
            finish_reason = %choice.finish_reason,
            input_tokens = wire_response.usage.prompt_tokens,
            output_tokens = wire_response.usage.completion_tokens,
            "completion received"
        );

        Ok(CompletionResponse {
            message: parse_wire_message(choice.message)?,
            stop_reason: map_stop_reason(&choice.finish_reason),
            usage: TokenUsage {
                input_tokens: wire_response.usage.prompt_tokens,
                output_tokens: wire_response.usage.completion_tokens,
            },
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    tool_type: String,
    function: WireFunction,
}

#[derive(Debug, Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    tool_type: String,
    function: WireFunctionCall,
}

#[derive(Debug, Serialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
    usage: WireUsage,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireResponseToolCall>>,
}

#[derive(Debug, Deserialize)]
struct WireResponseToolCall {
    id: String,
    function: WireResponseFunctionCall,
}

#[derive(Debug, Deserialize)]
struct WireResponseFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

// ============================================================================
// Conversion functions
// ============================================================================

/// Build wire messages: the system prompt becomes the leading message
fn build_wire_messages(system: Option<String>, messages: Vec<Message>) -> Vec<WireMessage> {
    let mut result = Vec::new();

    if let Some(system) = system {
        result.push(WireMessage {
            role: "system".to_string(),
            content: Some(system),
            tool_calls: None,
            tool_call_id: None,
        });
    }

    for message in messages {
        result.extend(convert_message(message));
    }

    result
}

/// One of our messages can expand to several wire messages: each tool
/// result block becomes its own `role: tool` message.
fn convert_message(message: Message) -> Vec<WireMessage> {
    let role = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    match message.content {
        MessageContent::Text(text) => vec![WireMessage {
            role: role.to_string(),
            content: Some(text),
            tool_calls: None,
            tool_call_id: None,
        }],
        MessageContent::Blocks(blocks) => {
            let mut text_parts = Vec::new();
            let mut tool_calls = Vec::new();
            let mut tool_results = Vec::new();

            for block in blocks {
                match block {
                    ContentBlock::Text { text } => text_parts.push(text),
                    ContentBlock::ToolUse { id, name, input } => {
                        tool_calls.push(WireToolCall {
                            id,
                            tool_type: "function".to_string(),
                            function: WireFunctionCall {
                                name,
                                arguments: input.to_string(),
                            },
                        });
                    }
                    ContentBlock::ToolResult {
                        tool_use_id,
                        content,
                    } => {
                        tool_results.push(WireMessage {
                            role: "tool".to_string(),
                            content: Some(content),
                            tool_calls: None,
                            tool_call_id: Some(tool_use_id),
                        });
                    }
                }
            }

            let mut out = Vec::new();
            if !text_parts.is_empty() || !tool_calls.is_empty() {
                out.push(WireMessage {
                    role: role.to_string(),
                    content: (!text_parts.is_empty()).then(|| text_parts.join("\n")),
                    tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
                    tool_call_id: None,
                });
            }
            out.extend(tool_results);
            out
        }
    }
}

fn convert_tools(tools: &[ToolDefinition]) -> Vec<WireTool> {
    tools
        .iter()
        .map(|tool| WireTool {
            tool_type: "function".to_string(),
            function: WireFunction {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: tool.input_schema.clone(),
            },
        })
        .collect()
}

fn parse_wire_message(message: WireResponseMessage) -> Result<Message> {
    let mut blocks = Vec::new();

    if let Some(text) = message.content {
        if !text.is_empty() {
            blocks.push(ContentBlock::Text { text });
        }
    }

    for call in message.tool_calls.unwrap_or_default() {
        let input = serde_json::from_str(&call.function.arguments).map_err(|e| {
            LlmError::UnexpectedResponse(format!(
                "tool call '{}' carried malformed arguments: {e}",
                call.function.name
            ))
        })?;
        blocks.push(ContentBlock::ToolUse {
            id: call.id,
            name: call.function.name,
            input,
        });
    }

    Ok(Message {
        role: Role::Assistant,
        content: MessageContent::Blocks(blocks),
    })
}

fn map_stop_reason(finish_reason: &str) -> StopReason {
    match finish_reason {
        "tool_calls" => StopReason::ToolUse,
        "length" => StopReason::MaxTokens,
        _ => StopReason::EndTurn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_prompt_leads_messages() {
        let messages = build_wire_messages(
            Some("You are an enrichment agent.".to_string()),
            vec![Message::user("Apple")],
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_tool_result_becomes_tool_role_message() {
        let converted = convert_message(Message::tool_result("call_1", "[]"));
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].role, "tool");
        assert_eq!(converted[0].tool_call_id.as_deref(), Some("call_1"));
    }

    #[test]
    fn test_assistant_tool_use_carries_serialized_arguments() {
        let message = Message {
            role: Role::Assistant,
            content: MessageContent::Blocks(vec![ContentBlock::ToolUse {
                id: "call_1".to_string(),
                name: "get_entity_news".to_string(),
                input: json!({"entity_name": "TSMC"}),
            }]),
        };
        let converted = convert_message(message);
        assert_eq!(converted.len(), 1);
        let calls = converted[0].tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "get_entity_news");
        assert!(calls[0].function.arguments.contains("TSMC"));
    }

    #[test]
    fn test_parse_wire_message_with_tool_calls() {
        let message = parse_wire_message(WireResponseMessage {
            content: None,
            tool_calls: Some(vec![WireResponseToolCall {
                id: "call_1".to_string(),
                function: WireResponseFunctionCall {
                    name: "fetch_article_content".to_string(),
                    arguments: "{\"url\": \"https://example.com\"}".to_string(),
                },
            }]),
        })
        .unwrap();
        assert!(message.has_tool_uses());
    }

    #[test]
    fn test_malformed_tool_arguments_rejected() {
        let result = parse_wire_message(WireResponseMessage {
            content: None,
            tool_calls: Some(vec![WireResponseToolCall {
                id: "call_1".to_string(),
                function: WireResponseFunctionCall {
                    name: "fetch_article_content".to_string(),
                    arguments: "not json".to_string(),
                },
            }]),
        });
        assert!(matches!(result, Err(LlmError::UnexpectedResponse(_))));
    }

    #[test]
    fn test_stop_reason_mapping() {
        assert_eq!(map_stop_reason("stop"), StopReason::EndTurn);
        assert_eq!(map_stop_reason("tool_calls"), StopReason::ToolUse);
        assert_eq!(map_stop_reason("length"), StopReason::MaxTokens);
    }
}
