//! Tool invocation gateway
//!
//! One implementation serves both reachability paths required of the tool
//! surface: stage agents call [`ToolGateway::invoke`] in-process, and the
//! protocol endpoint in `signal-server` is a thin codec over the same
//! method. The result is always a single string-serialized payload.

use crate::ToolRegistry;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Wire-facing description of one registered tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Tool name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// Argument schema in JSON Schema form
    pub input_schema: Value,
}

/// Gateway over a [`ToolRegistry`]
///
/// Guarantees of [`ToolGateway::invoke`]: arguments are validated against
/// the tool's declared schema before execution, and the return value is
/// always a serialized payload, never a panic or error crossing the
/// boundary. Failures come back as a serialized error object.
#[derive(Clone)]
pub struct ToolGateway {
    registry: Arc<ToolRegistry>,
}

impl ToolGateway {
    /// Create a gateway over `registry`
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry backing this gateway
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Describe every registered tool
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self
            .registry
            .list_tools()
            .iter()
            .map(|tool| ToolSpec {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema().to_json_schema(),
            })
            .collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Invoke a tool by name, returning a string-serialized payload
    pub async fn invoke(&self, name: &str, arguments: Value) -> String {
        let Some(tool) = self.registry.get(name) else {
            warn!(tool = name, "unknown tool requested");
            return error_payload(name, format!("unknown tool '{name}'"));
        };

        let validated = match signal_schema::validate(&tool.input_schema(), &arguments) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(tool = name, error = %e, "tool arguments rejected");
                return error_payload(name, e.to_string());
            }
        };

        debug!(tool = name, "invoking tool");
        match tool.execute(validated).await {
            Ok(result) => {
                serde_json::to_string(&result).unwrap_or_else(|e| error_payload(name, e.to_string()))
            }
            Err(e) => {
                warn!(tool = name, error = %e, "tool execution failed");
                error_payload(name, e.to_string())
            }
        }
    }
}

fn error_payload(tool: &str, message: String) -> String {
    json!({ "error": { "tool": tool, "message": message } }).to_string()
}
