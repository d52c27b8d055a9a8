//! Chat completion request type

use crate::{ChatMessage, ToolDefinition};
use serde::{Deserialize, Serialize};

/// A chat completion request carrying the full conversation
///
/// Serializes directly as the body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (e.g. "qwen3:8b")
    pub model: String,

    /// Ordered conversation history
    pub messages: Vec<ChatMessage>,

    /// Tool catalog available for the model to call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,

    /// Tool-choice policy ("auto" lets the model decide freely)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

impl ChatRequest {
    /// Create a builder for chat requests
    pub fn builder(model: impl Into<String>) -> ChatRequestBuilder {
        ChatRequestBuilder::new(model)
    }
}

/// Builder for [`ChatRequest`]
pub struct ChatRequestBuilder {
    model: String,
    messages: Vec<ChatMessage>,
    tools: Option<Vec<ToolDefinition>>,
    tool_choice: Option<String>,
}

impl ChatRequestBuilder {
    /// Create a new builder
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            tools: None,
            tool_choice: None,
        }
    }

    /// Set the conversation messages
    pub fn messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// Add a single message
    pub fn add_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the available tools and let the model choose freely
    pub fn tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = Some(tools);
        self.tool_choice = Some("auto".to_string());
        self
    }

    /// Override the tool-choice policy
    pub fn tool_choice(mut self, choice: impl Into<String>) -> Self {
        self.tool_choice = Some(choice.into());
        self
    }

    /// Build the chat request
    pub fn build(self) -> ChatRequest {
        ChatRequest {
            model: self.model,
            messages: self.messages,
            tools: self.tools,
            tool_choice: self.tool_choice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = ChatRequest::builder("qwen3:8b")
            .add_message(ChatMessage::system("You are a helpful assistant."))
            .add_message(ChatMessage::user("Hello"))
            .build();

        assert_eq!(request.model, "qwen3:8b");
        assert_eq!(request.messages.len(), 2);
        assert!(request.tools.is_none());
        assert!(request.tool_choice.is_none());
    }

    #[test]
    fn test_tools_imply_auto_choice() {
        let request = ChatRequest::builder("qwen3:8b")
            .add_message(ChatMessage::user("What is 2+2?"))
            .tools(vec![ToolDefinition::new(
                "calculate",
                "Do math",
                serde_json::json!({"type": "object", "properties": {}}),
            )])
            .build();

        assert_eq!(request.tool_choice.as_deref(), Some("auto"));
        assert_eq!(request.tools.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_serialization_omits_missing_catalog() {
        let request = ChatRequest::builder("qwen3:8b")
            .add_message(ChatMessage::user("hi"))
            .build();

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("tool_choice").is_none());
    }
}
