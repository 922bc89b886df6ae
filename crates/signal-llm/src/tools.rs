//! Tool definition types for model tool use

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition handed to the model provider
///
/// Describes a callable capability: its name, what it does, and the JSON
/// Schema of its arguments. Built from the tool registry at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in the registry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_creation() {
        let schema = json!({
            "type": "object",
            "properties": { "url": { "type": "string" } },
            "required": ["url"],
        });
        let tool = ToolDefinition::new("fetch_article_content", "Fetch article text", schema.clone());
        assert_eq!(tool.name, "fetch_article_content");
        assert_eq!(tool.input_schema, schema);
    }
}
