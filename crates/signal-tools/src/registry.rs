//! Tool registry for managing available capabilities

use crate::Tool;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry mapping tool names to their implementations
///
/// Built once at startup; the same registry backs both the in-process agent
/// tool sets and the remote protocol endpoint.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, rejecting a second registration under the same name
    ///
    /// Tool names are the lookup key for both the in-process and remote
    /// invocation paths, so a silent overwrite would change behavior at a
    /// distance. Registration order is a startup concern; a collision is a
    /// wiring bug and comes back as [`signal_core::Error::DuplicateTool`].
    pub fn register(&self, tool: Arc<dyn Tool>) -> signal_core::Result<()> {
        let mut tools = self.tools.write().unwrap();
        let name = tool.name().to_string();
        if tools.contains_key(&name) {
            return Err(signal_core::Error::DuplicateTool(name));
        }
        tools.insert(name, tool);
        Ok(())
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap();
        tools.get(name).cloned()
    }

    /// List all registered tools
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap();
        tools.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use signal_schema::Schema;

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        async fn execute(&self, _params: Value) -> signal_core::Result<Value> {
            Ok(Value::Null)
        }

        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test tool"
        }

        fn input_schema(&self) -> Schema {
            Schema::Object(vec![])
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("lookup"))).unwrap();
        assert!(registry.get("lookup").is_some());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("lookup"))).unwrap();
        let err = registry.register(Arc::new(NamedTool("lookup"))).unwrap_err();
        assert!(matches!(err, signal_core::Error::DuplicateTool(ref name) if name == "lookup"));
        assert_eq!(registry.list_tools().len(), 1);
    }
}
