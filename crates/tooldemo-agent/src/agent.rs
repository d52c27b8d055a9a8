//! Single-round tool-calling agent loop
//!
//! The loop issues at most two chat completion requests per invocation:
//! 1. Conversation plus the full tool catalog, tool choice left to the
//!    model.
//! 2. Only if the model requested tools: the conversation extended with
//!    one correlated tool-result message per request, catalog omitted.
//!
//! A model that wants to chain further tool calls after seeing results
//! gets no additional rounds; the second reply is the final answer.

use crate::{AgentConfig, AgentError, Result};
use serde_json::Value;
use std::sync::Arc;
use tooldemo_llm::{ChatMessage, ChatProvider, ChatRequest, ToolCall};
use tooldemo_tools::{Tool, ToolError, ToolRegistry};
use tracing::{debug, info, warn};

/// Orchestrates one user message through the model and the local tools
pub struct AgentLoop {
    provider: Arc<dyn ChatProvider>,
    registry: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl AgentLoop {
    /// Create a new agent loop
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        registry: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            registry,
            config,
        }
    }

    /// Run one agent invocation and return the model's final answer
    ///
    /// The conversation is built from scratch on every call; nothing is
    /// carried across invocations.
    pub async fn run(&self, user_message: &str) -> Result<String> {
        let mut conversation = vec![
            ChatMessage::system(&self.config.system_prompt),
            ChatMessage::user(user_message),
        ];

        let catalog = self.registry.definitions();
        info!(
            model = %self.config.model,
            tools = catalog.len(),
            "Sending conversation to the model"
        );

        let mut builder = ChatRequest::builder(&self.config.model).messages(conversation.clone());
        // Only advertise a catalog if there is one
        if !catalog.is_empty() {
            builder = builder.tools(catalog);
        }
        let reply = self.provider.complete(builder.build()).await?;

        if !reply.has_tool_calls() {
            info!("Model answered directly without using tools");
            return Ok(reply.text().unwrap_or_default().to_string());
        }

        let calls = reply.tool_calls().to_vec();
        info!(count = calls.len(), "Model requested tool calls");
        conversation.push(reply);

        // Resolve every requested name before executing anything, so a
        // single unknown tool aborts the invocation with no side effects
        let tools = self.resolve_tools(&calls)?;

        for (call, tool) in calls.iter().zip(tools) {
            let content = self.invoke_tool(&call.function.arguments, tool.as_ref()).await;
            conversation.push(ChatMessage::tool_result(
                &call.id,
                &call.function.name,
                content,
            ));
        }

        info!("Requesting final answer with tool results");
        let request = ChatRequest::builder(&self.config.model)
            .messages(conversation)
            .build();
        let reply = self.provider.complete(request).await?;

        Ok(reply.text().unwrap_or_default().to_string())
    }

    /// Look up all requested tools, in request order
    fn resolve_tools(&self, calls: &[ToolCall]) -> Result<Vec<Arc<dyn Tool>>> {
        calls
            .iter()
            .map(|call| {
                self.registry.get(&call.function.name).ok_or_else(|| {
                    warn!(tool = %call.function.name, "Requested tool is not registered");
                    AgentError::UnknownTool(call.function.name.clone())
                })
            })
            .collect()
    }

    /// Execute one tool call and serialize its result for the model
    ///
    /// Tool-level failures (schema mismatch, bad arguments JSON) are
    /// recovered here: they become textual error results instead of
    /// aborting the invocation.
    async fn invoke_tool(&self, arguments: &str, tool: &dyn Tool) -> String {
        debug!(tool = %tool.name(), arguments, "Executing tool");

        let result = match parse_arguments(arguments) {
            Ok(args) => tool.execute(args).await,
            Err(e) => Err(e),
        };

        match result {
            // JSON string results are embedded bare; everything else as
            // compact JSON, matching what the model expects to read back
            Ok(Value::String(s)) => s,
            Ok(other) => serde_json::to_string(&other).unwrap_or_else(|_| other.to_string()),
            Err(e) => {
                warn!(tool = %tool.name(), error = %e, "Tool execution failed");
                format!("Error: {e}")
            }
        }
    }
}

/// Parse the model's serialized argument mapping
///
/// Some models emit an empty string for zero-argument tools; that is
/// treated as an empty mapping rather than malformed JSON.
fn parse_arguments(arguments: &str) -> std::result::Result<Value, ToolError> {
    if arguments.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(arguments).map_err(ToolError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tooldemo_llm::{ChatError, Role};
    use tooldemo_tools::CalculateTool;

    /// Provider that replays scripted replies and records every request
    struct ScriptedProvider {
        replies: Mutex<VecDeque<ChatMessage>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<ChatMessage>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn complete(&self, request: ChatRequest) -> tooldemo_llm::Result<ChatMessage> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ChatError::RequestFailed("script exhausted".to_string()))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    /// Tool that records its invocations and returns a fixed value
    struct RecordingTool {
        name: &'static str,
        result: Value,
        invocations: Arc<Mutex<Vec<Value>>>,
    }

    impl RecordingTool {
        fn new(name: &'static str, result: Value) -> (Self, Arc<Mutex<Vec<Value>>>) {
            let invocations = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    name,
                    result,
                    invocations: invocations.clone(),
                },
                invocations,
            )
        }
    }

    #[async_trait]
    impl Tool for RecordingTool {
        async fn execute(&self, params: Value) -> tooldemo_tools::Result<Value> {
            self.invocations.lock().unwrap().push(params);
            Ok(self.result.clone())
        }

        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "recording stub"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }
    }

    fn assistant_with_calls(calls: Vec<ToolCall>) -> ChatMessage {
        ChatMessage {
            role: Role::Assistant,
            content: None,
            tool_calls: Some(calls),
            tool_call_id: None,
            name: None,
        }
    }

    fn agent(provider: Arc<dyn ChatProvider>, registry: ToolRegistry) -> AgentLoop {
        AgentLoop::new(provider, Arc::new(registry), AgentConfig::default())
    }

    #[tokio::test]
    async fn test_no_tool_calls_returns_text_verbatim() {
        let provider = Arc::new(ScriptedProvider::new(vec![ChatMessage::assistant(
            "A dog has four legs.",
        )]));
        let (fact_tool, invocations) = RecordingTool::new("get_random_fact", json!({}));
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(fact_tool));

        let answer = agent(provider.clone(), registry)
            .run("Tell me some animal that has 4 legs.")
            .await
            .unwrap();

        assert_eq!(answer, "A dog has four legs.");
        assert!(invocations.lock().unwrap().is_empty());

        // Single request, carrying the tool catalog
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tools.as_ref().map(Vec::len), Some(1));
        assert_eq!(requests[0].tool_choice.as_deref(), Some("auto"));
    }

    #[tokio::test]
    async fn test_two_tool_calls_run_in_order_with_correlation() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            assistant_with_calls(vec![
                ToolCall::new(
                    "call_1",
                    "calculate",
                    r#"{"operation": "add", "x": 50, "y": 25}"#,
                ),
                ToolCall::new("call_2", "get_random_fact", "{}"),
            ]),
            ChatMessage::assistant("75, and here is a fact."),
        ]));

        let (fact_tool, fact_invocations) =
            RecordingTool::new("get_random_fact", json!({"fact": "Bees sleep.", "source": "x"}));
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(CalculateTool));
        registry.register(Arc::new(fact_tool));

        let answer = agent(provider.clone(), registry)
            .run("Calculate 50 plus 25, and also tell me a random fact")
            .await
            .unwrap();

        assert_eq!(answer, "75, and here is a fact.");
        assert_eq!(fact_invocations.lock().unwrap().len(), 1);

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        // Second request omits the tool catalog
        assert!(requests[1].tools.is_none());

        // Conversation: system, user, assistant, then one correlated
        // tool result per call, in request order
        let messages = &requests[1].messages;
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[3].role, Role::Tool);
        assert_eq!(messages[3].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(messages[3].text(), Some("75.0"));
        assert_eq!(messages[4].role, Role::Tool);
        assert_eq!(messages[4].tool_call_id.as_deref(), Some("call_2"));
        assert_eq!(
            messages[4].text(),
            Some(r#"{"fact":"Bees sleep.","source":"x"}"#)
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_fails_loudly_without_executing_anything() {
        let provider = Arc::new(ScriptedProvider::new(vec![assistant_with_calls(vec![
            ToolCall::new("call_1", "calculate", r#"{"operation": "add", "x": 1, "y": 2}"#),
            ToolCall::new("call_2", "launch_rocket", "{}"),
        ])]));

        let (calc_tool, invocations) = RecordingTool::new("calculate", json!(3.0));
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(calc_tool));

        let result = agent(provider.clone(), registry).run("Add 1 and 2").await;

        match result {
            Err(AgentError::UnknownTool(name)) => assert_eq!(name, "launch_rocket"),
            other => panic!("expected UnknownTool, got {other:?}"),
        }
        // The known tool never ran, and no second request was issued
        assert!(invocations.lock().unwrap().is_empty());
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_tool_schema_mismatch_becomes_error_result() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            assistant_with_calls(vec![ToolCall::new(
                "call_1",
                "calculate",
                r#"{"operation": "add", "x": "one", "y": 2}"#,
            )]),
            ChatMessage::assistant("Those arguments did not work."),
        ]));

        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(CalculateTool));

        let answer = agent(provider.clone(), registry).run("Add one and 2").await.unwrap();
        assert_eq!(answer, "Those arguments did not work.");

        let messages = &provider.requests()[1].messages;
        let error_text = messages[3].text().unwrap();
        assert!(error_text.starts_with("Error: Invalid parameters:"));
    }

    #[tokio::test]
    async fn test_empty_arguments_are_an_empty_mapping() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            assistant_with_calls(vec![ToolCall::new("call_1", "get_random_fact", "")]),
            ChatMessage::assistant("Here is a fact."),
        ]));

        let (fact_tool, invocations) = RecordingTool::new("get_random_fact", json!({"fact": "x"}));
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(fact_tool));

        agent(provider, registry).run("A fact please").await.unwrap();

        let recorded = invocations.lock().unwrap();
        assert_eq!(recorded.as_slice(), [json!({})]);
    }

    #[tokio::test]
    async fn test_endpoint_failure_propagates() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let registry = ToolRegistry::new();

        let result = agent(provider, registry).run("Hello").await;
        assert!(matches!(result, Err(AgentError::Chat(_))));
    }
}
