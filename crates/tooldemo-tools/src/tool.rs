//! Tool trait definition

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use tooldemo_llm::ToolDefinition;

/// Trait for tools the model can ask the agent loop to execute
///
/// Each tool provides static metadata (name, description, JSON Schema
/// for its parameters) that is advertised to the model, plus an async
/// executable invoked with the model's argument payload.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with the given parameters
    ///
    /// `params` is the model's argument mapping, validated against
    /// [`Tool::parameters`] by deserializing into the tool's params
    /// struct. A schema mismatch returns [`crate::ToolError::InvalidParams`],
    /// which the agent loop feeds back to the model as an error result.
    ///
    /// Failures inside the tool's own logic (bad operation, HTTP
    /// failure) are *not* errors: they come back as `Ok` values carrying
    /// textual or structured error data, so the model can see them and
    /// respond.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// The tool's name, unique within a registry
    fn name(&self) -> &str;

    /// Natural-language description helping the model decide when to call
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters
    fn parameters(&self) -> Value;

    /// The definition advertised to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.parameters())
    }
}
