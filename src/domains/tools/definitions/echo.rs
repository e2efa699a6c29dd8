//! Echo tool definition.
//!
//! Returns the supplied text prefixed with "Echo: ". The simplest tool in
//! the catalog; it has no failure modes beyond validation.

use rmcp::model::{CallToolResult, Content};
use serde::Deserialize;
use tracing::instrument;

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoParams {
    /// Text to echo back.
    pub text: String,
}

/// Echo tool - returns the input text unchanged.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Echo back the provided text";
}

#[async_trait::async_trait]
impl ToolHandler for EchoTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new().field(FieldSpec::required(
            "text",
            FieldKind::String,
            "Text to echo back",
        ))
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: EchoParams = args.parse()?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Echo: {}",
            params.text
        ))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::validator::validate;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn call_args(value: serde_json::Value) -> ValidatedArguments {
        validate(&EchoTool.schema(), value.as_object().cloned().unwrap()).unwrap()
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_echo() {
        let result = EchoTool.call(call_args(json!({"text": "hello"}))).await.unwrap();
        assert_eq!(result_text(&result), "Echo: hello");
    }

    #[tokio::test]
    async fn test_echo_empty_string() {
        // Empty string is valid input, not a validation failure
        let result = EchoTool.call(call_args(json!({"text": ""}))).await.unwrap();
        assert_eq!(result_text(&result), "Echo: ");
    }

    #[test]
    fn test_missing_text_rejected() {
        let err = validate(&EchoTool.schema(), serde_json::Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
