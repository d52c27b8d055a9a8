//! Chat provider trait definition

use crate::{ChatMessage, ChatRequest, Result};
use async_trait::async_trait;

/// Trait for chat completion endpoints
///
/// The agent loop talks to the model through this seam, which keeps it
/// testable against a scripted provider. The production implementation
/// is [`crate::ChatClient`].
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request and return the assistant's message
    ///
    /// The returned message may include zero or more tool calls. Any
    /// failure to reach the endpoint or parse its response is fatal to
    /// the current invocation and surfaces here.
    async fn complete(&self, request: ChatRequest) -> Result<ChatMessage>;

    /// Name of the provider (for logging)
    fn name(&self) -> &str;
}
