//! Error types for tool execution

use thiserror::Error;

/// Result type for tool execution
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors raised by a tool before its own logic runs
///
/// Soft failures (division by zero, HTTP errors) are returned as data in
/// the tool's result value instead, so they never appear here.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The argument payload did not match the tool's declared schema
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidParams(e.to_string())
    }
}
