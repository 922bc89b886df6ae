//! Language-model invocation boundary
//!
//! The pipeline treats the model as an opaque capability behind a fixed
//! request/response contract: a [`CompletionRequest`] carries instructions,
//! the input payload, and the available tools; the [`CompletionResponse`] is
//! either raw structured output (validated downstream) or a tool-call
//! request the stage must service before resubmitting.

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;
pub mod tools;

pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LlmError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LlmProvider;
pub use tools::ToolDefinition;
