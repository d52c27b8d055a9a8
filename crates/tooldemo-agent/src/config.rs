//! Agent configuration

const DEFAULT_MODEL: &str = "qwen3:8b";
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant with access to tools. \
    Use them when needed to answer user questions accurately.";

/// Configuration for the agent loop
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier to request from the endpoint
    pub model: String,

    /// Fixed system instruction opening every conversation
    pub system_prompt: String,
}

impl AgentConfig {
    /// Create a config with the default local model and system prompt
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from environment variables
    ///
    /// Reads `OPENAI_MODEL` when set, keeping the default otherwise.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        config
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.model, "qwen3:8b");
        assert!(config.system_prompt.starts_with("You are a helpful assistant"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AgentConfig::new()
            .with_model("llama3:70b")
            .with_system_prompt("Answer tersely.");

        assert_eq!(config.model, "llama3:70b");
        assert_eq!(config.system_prompt, "Answer tersely.");
    }
}
