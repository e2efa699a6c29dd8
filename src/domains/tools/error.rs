//! Tool-specific error types.
//!
//! The three wire-visible error kinds are ordered by where the defect lies:
//! in the request's addressing (`NotFound`), in its payload
//! (`InvalidArguments`), or inside the server (`Timeout`, `Internal`).

use rmcp::model::{ErrorCode, ErrorData};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An outbound request was aborted after exceeding its deadline.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The tool execution failed for a server- or upstream-side reason.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// JSON-RPC error code this error maps to on the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::METHOD_NOT_FOUND,
            Self::InvalidArguments(_) => ErrorCode::INVALID_PARAMS,
            Self::Timeout(_) | Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<ToolError> for ErrorData {
    fn from(err: ToolError) -> Self {
        ErrorData::new(err.code(), err.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ToolError::not_found("nope").code(),
            ErrorCode::METHOD_NOT_FOUND
        );
        assert_eq!(
            ToolError::invalid_arguments("bad").code(),
            ErrorCode::INVALID_PARAMS
        );
        assert_eq!(ToolError::Timeout(10).code(), ErrorCode::INTERNAL_ERROR);
        assert_eq!(
            ToolError::internal("boom").code(),
            ErrorCode::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_error_data_message() {
        let data: ErrorData = ToolError::not_found("mystery_tool").into();
        assert_eq!(data.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(data.message.contains("mystery_tool"));
    }
}
