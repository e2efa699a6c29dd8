//! Dispatcher - routes an invocation to its tool and normalizes failures.
//!
//! The dispatch pipeline is: catalog lookup, argument validation, handler
//! execution. An unknown tool name or a validation failure returns before
//! the handler runs, so no partial side effect occurs for a malformed
//! request. A typed failure from a handler propagates verbatim; a panic is
//! caught here and normalized to an internal error. No fault escapes the
//! dispatcher.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject};
use tracing::{debug, warn};

use super::catalog::ToolCatalog;
use super::error::ToolError;
use super::validator::validate;

/// Dispatches invocation requests against the tool catalog.
pub struct Dispatcher {
    catalog: ToolCatalog,
}

impl Dispatcher {
    /// Create a dispatcher over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(ToolCatalog::builtin())
    }

    /// Create a dispatcher over an arbitrary catalog.
    pub fn with_catalog(catalog: ToolCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this dispatcher routes against.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Dispatch one invocation: resolve, validate, execute.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let entry = self
            .catalog
            .lookup(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        let args = validate(&entry.schema, arguments)?;

        debug!("Dispatching tool call: {}", name);

        match AssertUnwindSafe(entry.handler.call(args)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                let message = panic_message(panic);
                warn!("Tool '{}' panicked: {}", name, message);
                Err(ToolError::internal(format!(
                    "tool '{}' failed unexpectedly: {}",
                    name, message
                )))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
