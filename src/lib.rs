//! MCP Server Library
//!
//! This crate provides an MCP (Model Context Protocol) server exposing a
//! fixed catalog of schema-described utility tools to a single client.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool catalog, argument validator, dispatcher, and the
//!     individual tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use utility_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
