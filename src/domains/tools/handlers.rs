//! The tool handler contract.
//!
//! Each tool in the catalog implements [`ToolHandler`]. A handler only ever
//! receives arguments that passed schema validation, returns a
//! `CallToolResult` on success, and signals recoverable failures as typed
//! [`ToolError`] values rather than panicking.
//!
//! Side-effecting capabilities (an outbound HTTP client, the filesystem)
//! are injected at handler construction, not reached for globally.

use rmcp::model::CallToolResult;

use super::error::ToolError;
use super::schema::ToolSchema;
use super::validator::ValidatedArguments;

/// Trait implemented by every tool exposed in the catalog.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Unique tool name as registered in the catalog.
    fn name(&self) -> &'static str;

    /// Human-readable description shown to clients.
    fn description(&self) -> &'static str;

    /// The tool's declared input schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with validated arguments.
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError>;
}
