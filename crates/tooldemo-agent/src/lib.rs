//! Agent loop for the tool-calling demo
//!
//! Wires a [`tooldemo_llm::ChatProvider`] and a
//! [`tooldemo_tools::ToolRegistry`] into a single-round agent loop: one
//! completion request with the tool catalog, sequential tool execution
//! in request order, and one follow-up request carrying the results.

pub mod agent;
pub mod config;
pub mod error;

pub use agent::AgentLoop;
pub use config::AgentConfig;
pub use error::{AgentError, Result};
