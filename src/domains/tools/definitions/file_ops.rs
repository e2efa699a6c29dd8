//! File operations tool definition.
//!
//! One tool covering three operations: `read`, `write`, and `list`.
//! All filesystem faults map uniformly to internal errors; the operation
//! kind and missing-content checks are the only invalid-argument paths.

use rmcp::model::{CallToolResult, Content};
use serde::Deserialize;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

/// Parameters for the file operations tool.
#[derive(Debug, Clone, Deserialize)]
pub struct FileOperationsParams {
    /// One of `read`, `write`, `list`.
    pub operation: String,

    /// Target path.
    pub path: String,

    /// Content to write (required for `write`).
    pub content: Option<String>,
}

/// File operations tool - read, write, and list files.
pub struct FileOperationsTool;

impl FileOperationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "file_operations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform file operations: read a file, write a file, or list a directory";

    async fn read(path: &str) -> Result<CallToolResult, ToolError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ToolError::internal(format!("Failed to read file '{}': {}", path, e)))?;

        info!("Read {} bytes from {}", content.len(), path);
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    async fn write(path: &str, content: Option<&str>) -> Result<CallToolResult, ToolError> {
        // The schema marks `content` optional because only `write` needs it.
        let content = content.ok_or_else(|| {
            ToolError::invalid_arguments("missing required field 'content' for write operation")
        })?;

        fs::write(path, content)
            .await
            .map_err(|e| ToolError::internal(format!("Failed to write file '{}': {}", path, e)))?;

        info!("Wrote {} bytes to {}", content.len(), path);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Successfully wrote {} bytes to {}",
            content.len(),
            path
        ))]))
    }

    async fn list(path: &str) -> Result<CallToolResult, ToolError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| ToolError::internal(format!("Failed to access '{}': {}", path, e)))?;

        // Listing a regular file reports its size instead of erroring;
        // the operation never fails merely because the target is not a
        // directory.
        if metadata.is_file() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "{} is a file ({} bytes)",
                path,
                metadata.len()
            ))]));
        }

        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| ToolError::internal(format!("Failed to list '{}': {}", path, e)))?;

        // Non-recursive, underlying directory-read order, no sorting.
        let mut names = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().to_string()),
                Ok(None) => break,
                Err(e) => {
                    return Err(ToolError::internal(format!(
                        "Failed to list '{}': {}",
                        path, e
                    )));
                }
            }
        }

        info!("Listed {} entries in {}", names.len(), path);
        Ok(CallToolResult::success(vec![Content::text(
            names.join("\n"),
        )]))
    }
}

#[async_trait::async_trait]
impl ToolHandler for FileOperationsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .field(
                FieldSpec::required("operation", FieldKind::String, "Operation to perform")
                    .with_allowed(&["read", "write", "list"]),
            )
            .field(FieldSpec::required(
                "path",
                FieldKind::String,
                "Target file or directory path",
            ))
            .field(FieldSpec::optional(
                "content",
                FieldKind::String,
                "Content to write (required for the write operation)",
            ))
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: FileOperationsParams = args.parse()?;

        match params.operation.as_str() {
            "read" => Self::read(&params.path).await,
            "write" => Self::write(&params.path, params.content.as_deref()).await,
            "list" => Self::list(&params.path).await,
            other => {
                // The schema's enum check keeps other values out of here.
                warn!("Unknown file operation: {}", other);
                Err(ToolError::invalid_arguments(format!(
                    "unknown operation '{}'",
                    other
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::validator::validate;
    use rmcp::model::RawContent;
    use serde_json::json;
    use tempfile::TempDir;

    fn call_args(value: serde_json::Value) -> ValidatedArguments {
        validate(
            &FileOperationsTool.schema(),
            value.as_object().cloned().unwrap(),
        )
        .unwrap()
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_write_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");
        let path_str = path.to_string_lossy().to_string();

        let written = FileOperationsTool
            .call(call_args(json!({
                "operation": "write",
                "path": path_str,
                "content": "line one\nline two"
            })))
            .await
            .unwrap();
        assert!(result_text(&written).contains("17 bytes"));

        let read = FileOperationsTool
            .call(call_args(json!({"operation": "read", "path": path_str})))
            .await
            .unwrap();
        assert_eq!(result_text(&read), "line one\nline two");
    }

    #[tokio::test]
    async fn test_write_overwrites_entirely() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.txt");
        let path_str = path.to_string_lossy().to_string();

        for content in ["first version, rather long", "second"] {
            FileOperationsTool
                .call(call_args(json!({
                    "operation": "write",
                    "path": path_str,
                    "content": content
                })))
                .await
                .unwrap();
        }

        let read = FileOperationsTool
            .call(call_args(json!({"operation": "read", "path": path_str})))
            .await
            .unwrap();
        assert_eq!(result_text(&read), "second");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_internal_error() {
        let err = FileOperationsTool
            .call(call_args(json!({
                "operation": "read",
                "path": "/nonexistent/path/12345"
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }

    #[tokio::test]
    async fn test_write_without_content_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("never.txt");

        let err = FileOperationsTool
            .call(call_args(json!({
                "operation": "write",
                "path": path.to_string_lossy()
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_list_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "x").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "y").unwrap();

        let result = FileOperationsTool
            .call(call_args(json!({
                "operation": "list",
                "path": temp_dir.path().to_string_lossy()
            })))
            .await
            .unwrap();

        let text = result_text(&result);
        assert!(text.contains("a.txt"));
        assert!(text.contains("b.txt"));
    }

    #[tokio::test]
    async fn test_list_on_regular_file_reports_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sized.txt");
        std::fs::write(&path, "12345").unwrap();

        let result = FileOperationsTool
            .call(call_args(json!({
                "operation": "list",
                "path": path.to_string_lossy()
            })))
            .await
            .unwrap();
        assert!(result_text(&result).contains("5 bytes"));
    }

    #[test]
    fn test_unknown_operation_rejected_by_schema() {
        let err = validate(
            &FileOperationsTool.schema(),
            json!({"operation": "append", "path": "/tmp/x"})
                .as_object()
                .cloned()
                .unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
