//! Tool framework for the tool-calling demo
//!
//! Defines the [`Tool`] trait, the static [`ToolRegistry`], and the two
//! built-in tools the demo advertises to the model: a calculator and a
//! random-fact lookup.

pub mod calculate;
pub mod error;
pub mod random_fact;
pub mod registry;
pub mod tool;

pub use calculate::CalculateTool;
pub use error::{Result, ToolError};
pub use random_fact::RandomFactTool;
pub use registry::ToolRegistry;
pub use tool::Tool;
