//! Adapter from Filewright tools to MCP tool calls

use filewright_core::{ExecutionResult, Tool};
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::{McpError, McpResult};

/// Wraps a tool so it can be called from the async MCP service.
#[derive(Clone)]
pub struct ToolAdapter {
    tool: Arc<dyn Tool>,
}

impl ToolAdapter {
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self { tool }
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    /// Run the tool on the blocking pool with serialized `args`.
    pub async fn call<A: Serialize>(&self, args: &A) -> McpResult<CallToolResult> {
        let input = serde_json::to_string(args)?;
        let tool = Arc::clone(&self.tool);

        let result = tokio::task::spawn_blocking(move || tool.call(input))
            .await
            .map_err(|e| McpError::InternalError(format!("tool task failed: {}", e)))?;

        if let Some(reason) = result.failure_reason() {
            warn!(tool = self.name(), category = reason.category(), error = %reason, "Tool call failed");
        }
        Ok(to_call_tool_result(result))
    }
}

/// Tool failures become error results, never protocol errors.
pub fn to_call_tool_result(result: ExecutionResult) -> CallToolResult {
    match result {
        ExecutionResult::Success { output } => CallToolResult::success(vec![Content::text(output)]),
        ExecutionResult::Failure { reason } => {
            CallToolResult::error(vec![Content::text(reason.message())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filewright_core::FailureReason;

    struct ShoutTool;

    impl Tool for ShoutTool {
        fn name(&self) -> &str {
            "shout"
        }

        fn call(&self, input: String) -> ExecutionResult {
            let value: serde_json::Value = match serde_json::from_str(&input) {
                Ok(v) => v,
                Err(e) => return ExecutionResult::invalid_input(e.to_string()),
            };
            match value["text"].as_str() {
                Some(text) => ExecutionResult::success(text.to_uppercase()),
                None => ExecutionResult::invalid_input("missing text"),
            }
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_call_success() {
        let adapter = ToolAdapter::new(Arc::new(ShoutTool));
        let result = adapter.call(&serde_json::json!({"text": "hey"})).await.unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "HEY");
    }

    #[tokio::test]
    async fn test_call_failure_is_error_result() {
        let adapter = ToolAdapter::new(Arc::new(ShoutTool));
        let result = adapter.call(&serde_json::json!({})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Invalid input: missing text");
    }

    #[test]
    fn test_failure_message_rendering() {
        let result = to_call_tool_result(ExecutionResult::failed(FailureReason::NotFound {
            resource: "/missing".to_string(),
        }));
        assert_eq!(text_of(&result), "Not found: /missing");
    }
}
