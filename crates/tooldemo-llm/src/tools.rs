//! Tool catalog types for chat completion requests

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool advertised to the model
///
/// Describes a tool the model may ask the orchestrating loop to execute,
/// including its name, description, and parameter schema in JSON Schema
/// format. On the wire this becomes `{"type": "function", "function": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Always "function" in the OpenAI contract
    #[serde(rename = "type")]
    pub tool_type: String,

    /// Name, description, and parameter schema
    pub function: FunctionDefinition,
}

/// The function half of a tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Tool name (must match a tool in the local registry)
    pub name: String,

    /// Natural-language description the model uses to decide when to call
    pub description: String,

    /// JSON schema for the tool's parameters
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    /// The tool's name
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Helper module to build JSON schemas for tool parameters
pub mod schema {
    use serde_json::{Value, json};

    /// Object schema with properties and a required-property list
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// String property schema restricted to an enumerated set of values
    pub fn string_enum(description: &str, values: &[&str]) -> Value {
        json!({
            "type": "string",
            "enum": values,
            "description": description,
        })
    }

    /// Number property schema
    pub fn number(description: &str) -> Value {
        json!({
            "type": "number",
            "description": description,
        })
    }
}
