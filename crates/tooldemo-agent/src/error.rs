//! Error types for the agent loop

use thiserror::Error;

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors that abort an agent invocation
#[derive(Error, Debug)]
pub enum AgentError {
    /// The model requested a tool name absent from the registry
    ///
    /// This indicates a catalog/registry mismatch and fails loudly
    /// rather than being fed back to the model.
    #[error("Unknown tool requested by the model: {0}")]
    UnknownTool(String),

    /// The chat completion endpoint could not be reached or returned an
    /// invalid response; not retried
    #[error(transparent)]
    Chat(#[from] tooldemo_llm::ChatError),
}
