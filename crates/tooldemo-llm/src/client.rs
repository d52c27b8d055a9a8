//! OpenAI-compatible chat completion client
//!
//! Works against any endpoint implementing the OpenAI chat completion
//! contract. The defaults target a local Ollama server, which requires
//! an API key header but ignores its value.

use crate::{ChatError, ChatMessage, ChatProvider, ChatRequest, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_API_BASE: &str = "http://localhost:11434/v1";
const DEFAULT_API_KEY: &str = "ollama";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the chat client
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Credential sent as a Bearer token; required by the protocol but
    /// unused by local model servers
    pub api_key: String,

    /// Base URL of the endpoint (default: Ollama's local address)
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl ChatConfig {
    /// Create a config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a config from environment variables
    ///
    /// Reads `OPENAI_API_BASE` and `OPENAI_API_KEY` when set, falling
    /// back to the local Ollama defaults otherwise.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom API base URL
    ///
    /// Useful for other local deployments (LM Studio, llama.cpp, vLLM)
    /// or the hosted OpenAI API.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

/// Chat completion client for OpenAI-compatible endpoints
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
}

impl ChatClient {
    /// Create a client with custom configuration
    pub fn with_config(config: ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client with the default local Ollama configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ChatConfig::default())
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ChatConfig::from_env())
    }

    /// The current configuration
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait]
impl ChatProvider for ChatClient {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatMessage> {
        debug!(
            messages = request.messages.len(),
            tools = request.tools.as_ref().map_or(0, Vec::len),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(map_status_error(status.as_u16(), &request.model, error_text));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            ChatError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        // Multiple choices are possible on the wire; we always use the first
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::UnexpectedResponse("No choices in response".to_string()))?;

        debug!(
            finish_reason = %choice.finish_reason.as_deref().unwrap_or("unknown"),
            tool_calls = choice.message.tool_calls().len(),
            "Received chat completion response"
        );

        Ok(choice.message)
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }
}

/// Map a non-success HTTP status to a typed error
fn map_status_error(status: u16, model: &str, body: String) -> ChatError {
    match status {
        401 => ChatError::AuthenticationFailed,
        429 => ChatError::RateLimitExceeded(body),
        400 => ChatError::InvalidRequest(body),
        404 => ChatError::ModelNotFound(model.to_string()),
        _ => ChatError::RequestFailed(format!("HTTP {status}: {body}")),
    }
}

// ============================================================================
// Wire response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}
