//! Current-time tool definition.

use chrono::{SecondsFormat, Utc};
use rmcp::model::{CallToolResult, Content};
use tracing::instrument;

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::ToolSchema;
use crate::domains::tools::validator::ValidatedArguments;

/// Current-time tool - reports the current UTC instant as ISO-8601.
///
/// Takes no arguments. Not deterministic and never retried.
pub struct GetTimeTool;

impl GetTimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current date and time as an ISO-8601 timestamp";
}

#[async_trait::async_trait]
impl ToolHandler for GetTimeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
    }

    #[instrument(skip_all)]
    async fn call(&self, _args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Current time: {}",
            now
        ))]))
    }
}
