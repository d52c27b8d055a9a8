//! Random fact lookup tool

use crate::{Result, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tooldemo_llm::tools::schema;
use tracing::info;

const FACT_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";
const FACT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches a random fact from a public, unauthenticated API
///
/// Network failures and non-success statuses come back as structured
/// error results (`{"error": ...}`), never as Rust errors, so the agent
/// loop continues and the model decides how to respond.
pub struct RandomFactTool {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct FactResponse {
    text: String,
    source: Option<String>,
}

impl RandomFactTool {
    /// Create a tool pointing at the public fact API
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: FACT_URL.to_string(),
        }
    }

    /// Point the tool at a different endpoint (for local stubs)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    async fn fetch_fact(&self) -> Value {
        info!(url = %self.url, "Tool called: get_random_fact");

        let response = match self.client.get(&self.url).timeout(FACT_TIMEOUT).send().await {
            Ok(response) => response,
            Err(e) => return json!({"error": format!("Error fetching fact: {e}")}),
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return json!({"error": format!("Error fetching fact: {e}")}),
        };

        transform_response(status, &body)
    }
}

impl Default for RandomFactTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a fact-service response into the tool's result value
fn transform_response(status: u16, body: &str) -> Value {
    if status != 200 {
        return json!({"error": format!("Could not fetch random fact. Status: {status}")});
    }

    match serde_json::from_str::<FactResponse>(body) {
        Ok(fact) => json!({
            "fact": fact.text,
            "source": fact.source.unwrap_or_else(|| "Unknown".to_string()),
        }),
        Err(e) => json!({"error": format!("Error fetching fact: {e}")}),
    }
}

#[async_trait]
impl Tool for RandomFactTool {
    async fn execute(&self, _params: Value) -> Result<Value> {
        Ok(self.fetch_fact().await)
    }

    fn name(&self) -> &str {
        "get_random_fact"
    }

    fn description(&self) -> &str {
        "Get a random interesting fact from the internet"
    }

    fn parameters(&self) -> Value {
        schema::object(json!({}), vec![])
    }
}
