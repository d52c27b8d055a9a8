//! Chat completion layer for the tool-calling demo
//!
//! This crate provides everything needed to talk to an OpenAI-compatible
//! chat completion endpoint:
//!
//! - Conversation message types in the OpenAI wire shape
//! - Chat request builder with tool catalog support
//! - Tool definitions for function calling
//! - The [`ChatProvider`] seam and its reqwest-based [`ChatClient`]

pub mod client;
pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod tools;

// Re-export main types
pub use client::{ChatClient, ChatConfig};
pub use completion::{ChatRequest, ChatRequestBuilder};
pub use error::{ChatError, Result};
pub use messages::{ChatMessage, FunctionCall, Role, ToolCall};
pub use provider::ChatProvider;
pub use tools::ToolDefinition;
