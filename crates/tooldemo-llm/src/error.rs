//! Error types for chat completion operations

use thiserror::Error;

/// Result type for chat completion operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Errors that can occur while talking to a chat completion endpoint
///
/// All of these are fatal to the current agent invocation; tool-level
/// failures never surface here because they are returned to the model
/// as tool results instead.
#[derive(Error, Debug)]
pub enum ChatError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Model not found
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),
}
