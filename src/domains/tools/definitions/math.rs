//! Arithmetic tool definitions.
//!
//! `add_numbers` and `multiply_numbers` use standard f64 arithmetic:
//! no overflow checking and no integer-only restriction. Results render the
//! way Rust displays the machine value, so `2 + 3 = 5` rather than `5.0`.

use rmcp::model::{CallToolResult, Content};
use serde::Deserialize;
use tracing::instrument;

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

/// Parameters shared by both arithmetic tools.
#[derive(Debug, Clone, Deserialize)]
pub struct MathParams {
    /// First operand.
    pub a: f64,

    /// Second operand.
    pub b: f64,
}

fn math_schema() -> ToolSchema {
    ToolSchema::new()
        .field(FieldSpec::required("a", FieldKind::Number, "First number"))
        .field(FieldSpec::required("b", FieldKind::Number, "Second number"))
}

/// Addition tool.
pub struct AddNumbersTool;

impl AddNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers together";
}

#[async_trait::async_trait]
impl ToolHandler for AddNumbersTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        math_schema()
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: MathParams = args.parse()?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{} + {} = {}",
            params.a,
            params.b,
            params.a + params.b
        ))]))
    }
}

/// Multiplication tool.
pub struct MultiplyNumbersTool;

impl MultiplyNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "multiply_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers together";
}

#[async_trait::async_trait]
impl ToolHandler for MultiplyNumbersTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        math_schema()
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: MathParams = args.parse()?;
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{} * {} = {}",
            params.a,
            params.b,
            params.a * params.b
        ))]))
    }
}
