//! Conversation message types
//!
//! These types serialize directly as the OpenAI chat completion wire
//! format, so a conversation can be sent to any OpenAI-compatible
//! endpoint (Ollama, LM Studio, vLLM, the real thing) without a
//! conversion layer.

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant message (may carry tool calls)
    Assistant,
    /// Tool result message, correlated to a tool call by id
    Tool,
}

/// A tool invocation requested by the model inside an assistant message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Correlation identifier for this call
    pub id: String,
    /// Always "function" in the OpenAI contract
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function the model wants invoked
    pub function: FunctionCall,
}

/// Function name plus its serialized argument mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Tool name, resolved against the local registry
    pub name: String,
    /// Arguments as a raw JSON string (the model emits text, not JSON)
    pub arguments: String,
}

impl ToolCall {
    /// Create a tool call with the given id, name, and arguments
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,

    /// Text content; absent on assistant messages that only call tools
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool calls requested by the assistant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,

    /// Id of the tool call this message answers (role = tool only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Name of the tool that produced this result (role = tool only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Create a system message with text
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(text.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(text.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Create an assistant message with text
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(text.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a tool-result message correlated to a tool call
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
            name: Some(tool_name.into()),
        }
    }

    /// Text content of the message, if any
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Tool calls requested by this message, in the order the model
    /// emitted them
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.tool_calls.as_deref().unwrap_or_default()
    }

    /// Check if this message requests any tool invocations
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls().is_empty()
    }
}
