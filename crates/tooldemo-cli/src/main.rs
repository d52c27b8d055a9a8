//! Tool-calling demo against a local OpenAI-compatible model
//!
//! Runs four fixed example queries showing the model triggering the
//! calculator, the random-fact lookup, both at once, and no tool at all.
//!
//! Configuration comes from the environment (all optional):
//!
//! ```bash
//! export OPENAI_API_BASE="http://localhost:11434/v1"   # Ollama default
//! export OPENAI_API_KEY="ollama"                        # unused by Ollama
//! export OPENAI_MODEL="qwen3:8b"
//! cargo run -p tooldemo-cli
//! ```

use anyhow::Result;
use std::sync::Arc;
use tooldemo_agent::{AgentConfig, AgentLoop};
use tooldemo_llm::ChatClient;
use tooldemo_tools::{CalculateTool, RandomFactTool, ToolRegistry};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run_query(agent: &AgentLoop, query: &str) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("User: {query}");
    println!("{}\n", "=".repeat(60));

    let answer = agent.run(query).await?;

    println!("Assistant: {answer}\n");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let client = ChatClient::from_env()?;
    let config = AgentConfig::from_env();
    info!(api_base = %client.config().api_base, model = %config.model, "Starting tooldemo");

    println!("Starting LLM agent with tool calling (OpenAI-compatible API)");
    println!("Endpoint: {}", client.config().api_base);
    println!("Model:    {}", config.model);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CalculateTool));
    registry.register(Arc::new(RandomFactTool::new()));

    let agent = AgentLoop::new(Arc::new(client), Arc::new(registry), config);

    // Calculator tool
    run_query(&agent, "What is 11 multiplied by 11?").await?;

    // Random fact API
    run_query(&agent, "Tell me an interesting random fact").await?;

    // No tool
    run_query(&agent, "Tell me some animal that has 4 legs.").await?;

    // Multiple tools
    run_query(&agent, "Calculate 50 plus 25, and also tell me a random fact").await?;

    Ok(())
}
