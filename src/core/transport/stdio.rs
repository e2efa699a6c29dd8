//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended
//! mode. Shutdown is cooperative: an interrupt cancels the running service,
//! which stops reading new messages and lets in-flight tool calls settle.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                // Dropping the running service closes the transport; in-flight
                // work is not forcibly killed.
                info!("Interrupt received, closing transport");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
