//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value;
use signal_core::Result;
use signal_schema::Schema;

/// Trait for capabilities that agents can invoke
///
/// Each tool declares its argument schema as an explicit [`Schema`] value;
/// the gateway validates arguments against it before `execute` ever runs,
/// so implementations may assume declared required fields are present.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with validated parameters
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a [`crate::ToolRegistry`].
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// Helps the model decide when to use this tool.
    fn description(&self) -> &str;

    /// Get the tool's argument schema
    fn input_schema(&self) -> Schema;
}
