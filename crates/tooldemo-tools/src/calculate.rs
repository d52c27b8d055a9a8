//! Calculator tool

use crate::{Result, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tooldemo_llm::tools::schema;
use tracing::info;

/// Pure arithmetic over two numbers
///
/// Division by zero and unknown operations yield textual error results
/// rather than Rust errors, so the model sees the failure as tool output
/// and can respond to it.
pub struct CalculateTool;

#[derive(Debug, Deserialize)]
struct CalculateParams {
    operation: String,
    x: f64,
    y: f64,
}

fn calculate(params: &CalculateParams) -> Value {
    let result = match params.operation.as_str() {
        "add" => params.x + params.y,
        "subtract" => params.x - params.y,
        "multiply" => params.x * params.y,
        "divide" => {
            if params.y == 0.0 {
                return json!("Error: Division by zero");
            }
            params.x / params.y
        }
        other => return json!(format!("Error: Unknown operation '{other}'")),
    };
    json!(result)
}

#[async_trait]
impl Tool for CalculateTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: CalculateParams = serde_json::from_value(params)?;
        let result = calculate(&params);
        info!(
            operation = %params.operation,
            x = params.x,
            y = params.y,
            result = %result,
            "Tool called: calculate"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "Perform basic mathematical operations (add, subtract, multiply, divide)"
    }

    fn parameters(&self) -> Value {
        schema::object(
            json!({
                "operation": schema::string_enum(
                    "The mathematical operation to perform",
                    &["add", "subtract", "multiply", "divide"],
                ),
                "x": schema::number("The first number"),
                "y": schema::number("The second number"),
            }),
            vec!["operation", "x", "y"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolError;

    async fn run(operation: &str, x: f64, y: f64) -> Value {
        CalculateTool
            .execute(json!({"operation": operation, "x": x, "y": y}))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_exact_arithmetic() {
        assert_eq!(run("add", 50.0, 25.0).await, json!(75.0));
        assert_eq!(run("subtract", 50.0, 25.0).await, json!(25.0));
        assert_eq!(run("multiply", 11.0, 11.0).await, json!(121.0));
        assert_eq!(run("divide", 50.0, 25.0).await, json!(2.0));
    }

    #[tokio::test]
    async fn test_division_by_zero_is_a_value() {
        let result = run("divide", 42.0, 0.0).await;
        assert_eq!(result, json!("Error: Division by zero"));
    }

    #[tokio::test]
    async fn test_unknown_operation_names_the_operation() {
        let result = run("modulo", 1.0, 2.0).await;
        assert_eq!(result, json!("Error: Unknown operation 'modulo'"));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_invalid_params() {
        let result = CalculateTool
            .execute(json!({"operation": "add", "x": "not a number"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParams(_))));
    }

    #[test]
    fn test_declared_schema() {
        let params = CalculateTool.parameters();
        assert_eq!(params["type"], "object");
        assert_eq!(params["required"], json!(["operation", "x", "y"]));
        assert_eq!(
            params["properties"]["operation"]["enum"],
            json!(["add", "subtract", "multiply", "divide"])
        );
    }
}
