//! HTTP request tool definition.
//!
//! Issues a single outbound HTTP request. The timeout is enforced by
//! dropping the in-flight call once the deadline passes, so an aborted
//! request is never retried or duplicated.

use std::time::Duration;

use rmcp::model::{CallToolResult, Content};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

/// Default timeout when the caller does not supply one.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Parameters for the HTTP request tool.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpRequestParams {
    /// Request URL.
    pub url: String,

    /// HTTP method, defaults to GET.
    pub method: Option<String>,

    /// Request headers as a string-to-string mapping.
    pub headers: Option<serde_json::Map<String, serde_json::Value>>,

    /// Request body, sent verbatim for POST/PUT/PATCH.
    pub body: Option<String>,

    /// Timeout in milliseconds, defaults to 10000.
    pub timeout: Option<f64>,
}

/// HTTP request tool - performs one outbound request with a timeout.
pub struct HttpRequestTool {
    client: Client,
}

impl HttpRequestTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "http_request";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Make an HTTP request to a URL with optional method, headers, body, and timeout";

    /// Create the tool with its own outbound client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn perform(&self, params: &HttpRequestParams) -> Result<(String, String, String), ToolError> {
        let method_name = params.method.as_deref().unwrap_or("GET").to_uppercase();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| ToolError::invalid_arguments(format!("unsupported HTTP method '{}'", method_name)))?;

        let mut request = self.client.request(method.clone(), &params.url);

        let mut has_content_type = false;
        if let Some(headers) = &params.headers {
            for (name, value) in headers {
                let value = value.as_str().ok_or_else(|| {
                    ToolError::invalid_arguments(format!("header '{}' must be a string", name))
                })?;
                if name.eq_ignore_ascii_case("content-type") {
                    has_content_type = true;
                }
                request = request.header(name.as_str(), value);
            }
        }

        // A body is only attached for methods that carry one, and the
        // content type defaults to JSON unless the caller set their own.
        if let Some(body) = &params.body {
            if method == Method::POST || method == Method::PUT || method == Method::PATCH {
                if !has_content_type {
                    request = request.header(CONTENT_TYPE, "application/json");
                }
                request = request.body(body.clone());
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ToolError::internal(format!("Request failed: {}", e)))?;

        let status = response.status().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let raw_body = response
            .text()
            .await
            .map_err(|e| ToolError::internal(format!("Failed to read response body: {}", e)))?;

        // Pretty-print JSON bodies; anything else is returned as raw text.
        let body = if content_type.contains("json") {
            serde_json::from_str::<serde_json::Value>(&raw_body)
                .and_then(|v| serde_json::to_string_pretty(&v))
                .unwrap_or(raw_body)
        } else {
            raw_body
        };

        Ok((status, content_type, body))
    }
}

impl Default for HttpRequestTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ToolHandler for HttpRequestTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .field(FieldSpec::required("url", FieldKind::String, "Request URL"))
            .field(FieldSpec::optional(
                "method",
                FieldKind::String,
                "HTTP method (default: GET)",
            ))
            .field(FieldSpec::optional(
                "headers",
                FieldKind::Object,
                "Request headers as a string-to-string object",
            ))
            .field(FieldSpec::optional(
                "body",
                FieldKind::String,
                "Request body, sent for POST/PUT/PATCH",
            ))
            .field(FieldSpec::optional(
                "timeout",
                FieldKind::Number,
                "Timeout in milliseconds (default: 10000)",
            ))
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: HttpRequestParams = args.parse()?;
        // Fractional milliseconds are truncated.
        let timeout_ms = match params.timeout {
            Some(ms) if ms.is_finite() && ms >= 1.0 => ms as u64,
            Some(ms) => {
                return Err(ToolError::invalid_arguments(format!(
                    "timeout must be at least 1 millisecond, got {}",
                    ms
                )));
            }
            None => DEFAULT_TIMEOUT_MS,
        };
        let method_name = params.method.as_deref().unwrap_or("GET").to_uppercase();

        info!("HTTP {} {} (timeout {} ms)", method_name, params.url, timeout_ms);

        // Dropping the future on expiry aborts the in-flight request.
        let (status, content_type, body) =
            match tokio::time::timeout(Duration::from_millis(timeout_ms), self.perform(&params))
                .await
            {
                Ok(result) => result?,
                Err(_) => return Err(ToolError::Timeout(timeout_ms)),
            };

        Ok(CallToolResult::success(vec![Content::text(format!(
            "HTTP {} {}\nStatus: {}\nContent-Type: {}\n\n{}",
            method_name, params.url, status, content_type, body
        ))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::validator::validate;
    use rmcp::model::RawContent;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn call_args(value: serde_json::Value) -> ValidatedArguments {
        validate(
            &HttpRequestTool::new().schema(),
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

    /// Local stand-in for a remote server: replies with a canned response
    /// after an optional delay.
    async fn spawn_server(response: String, delay: Duration) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                tokio::time::sleep(delay).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    fn http_response(content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            content_type,
            body.len(),
            body
        )
    }

    #[tokio::test]
    async fn test_get_plain_text() {
        let url = spawn_server(http_response("text/plain", "hello"), Duration::ZERO).await;

        let result = HttpRequestTool::new()
            .call(call_args(json!({"url": url})))
            .await
            .unwrap();

        let text = result_text(&result);
        assert!(text.starts_with("HTTP GET"));
        assert!(text.contains("Status: 200"));
        assert!(text.contains("Content-Type: text/plain"));
        assert!(text.ends_with("hello"));
    }

    #[tokio::test]
    async fn test_json_response_is_pretty_printed() {
        let url = spawn_server(
            http_response("application/json", r#"{"ok":true,"n":1}"#),
            Duration::ZERO,
        )
        .await;

        let result = HttpRequestTool::new()
            .call(call_args(json!({"url": url})))
            .await
            .unwrap();

        let text = result_text(&result);
        assert!(text.contains("\"ok\": true"));
    }

    #[tokio::test]
    async fn test_non_positive_timeout_is_rejected() {
        for timeout in [0, -100] {
            let err = HttpRequestTool::new()
                .call(call_args(json!({
                    "url": "http://127.0.0.1:1/",
                    "timeout": timeout
                })))
                .await
                .unwrap_err();
            match err {
                ToolError::InvalidArguments(msg) => assert!(msg.contains("timeout")),
                other => panic!("expected InvalidArguments, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_fractional_timeout_is_truncated() {
        let url = spawn_server(http_response("text/plain", "ok"), Duration::ZERO).await;

        let result = HttpRequestTool::new()
            .call(call_args(json!({"url": url, "timeout": 1500.75})))
            .await
            .unwrap();
        assert!(result_text(&result).contains("Status: 200"));
    }

    #[tokio::test]
    async fn test_timeout_aborts_request() {
        let url = spawn_server(
            http_response("text/plain", "too late"),
            Duration::from_secs(5),
        )
        .await;

        let err = HttpRequestTool::new()
            .call(call_args(json!({"url": url, "timeout": 100})))
            .await
            .unwrap_err();

        match err {
            ToolError::Timeout(ms) => assert_eq!(ms, 100),
            other => panic!("expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let err = HttpRequestTool::new()
            .call(call_args(
                json!({"url": "http://localhost", "method": "NOT A METHOD"}),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_non_string_header_rejected() {
        let err = HttpRequestTool::new()
            .call(call_args(json!({
                "url": "http://localhost",
                "headers": {"x-count": 3}
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_internal_error() {
        // Reserved TEST-NET address, nothing listens there.
        let err = HttpRequestTool::new()
            .call(call_args(json!({
                "url": "http://192.0.2.1:9/",
                "timeout": 1500
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Internal(_) | ToolError::Timeout(_)));
    }
}
