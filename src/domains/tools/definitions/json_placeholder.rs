//! JSONPlaceholder tool definition.
//!
//! Fetches sample REST data from jsonplaceholder.typicode.com and returns
//! it pretty-printed. Useful for demonstrating API integration without
//! credentials.

use rmcp::model::{CallToolResult, Content};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Parameters for the JSONPlaceholder tool.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonPlaceholderParams {
    /// Resource collection to fetch.
    pub endpoint: String,

    /// Optional numeric id selecting a single resource.
    pub id: Option<f64>,
}

/// JSONPlaceholder tool - fetch sample data from a public REST API.
pub struct JsonPlaceholderTool {
    client: Client,
}

impl JsonPlaceholderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "json_placeholder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetch sample data from the JSONPlaceholder REST API (posts, comments, users, ...)";

    /// Create the tool with its own outbound client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build the request path, appending the id segment when supplied.
    fn build_url(endpoint: &str, id: Option<f64>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", BASE_URL, endpoint, id as i64),
            None => format!("{}/{}", BASE_URL, endpoint),
        }
    }
}

impl Default for JsonPlaceholderTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ToolHandler for JsonPlaceholderTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .field(
                FieldSpec::required("endpoint", FieldKind::String, "Resource collection to fetch")
                    .with_allowed(&["posts", "comments", "albums", "photos", "todos", "users"]),
            )
            .field(FieldSpec::optional(
                "id",
                FieldKind::Number,
                "Numeric id of a single resource",
            ))
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: JsonPlaceholderParams = args.parse()?;
        let url = Self::build_url(&params.endpoint, params.id);

        info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ToolError::internal(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ToolError::internal(format!(
                "JSONPlaceholder returned {} for {}",
                response.status(),
                url
            )));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ToolError::internal(format!("Failed to parse response: {}", e)))?;

        let pretty = serde_json::to_string_pretty(&value)
            .map_err(|e| ToolError::internal(format!("Failed to format response: {}", e)))?;

        Ok(CallToolResult::success(vec![Content::text(pretty)]))
    }
}
