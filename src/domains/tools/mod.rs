//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to
//! perform specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Structural input schemas shared by validator and catalog
//! - `validator.rs` - Argument validation producing `ValidatedArguments`
//! - `catalog.rs` - The immutable name -> {schema, handler} registry
//! - `dispatcher.rs` - Lookup, validation, execution, fault normalization
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define its params struct, schema, and `ToolHandler` impl
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `catalog.rs` inside `ToolCatalog::builtin()`
//!
//! **No need to modify `server.rs`!** The catalog drives both `tools/list`
//! and `tools/call`.

pub mod definitions;

mod catalog;
mod dispatcher;
mod error;
mod handlers;
mod schema;
mod validator;

pub use catalog::{CatalogEntry, ToolCatalog};
pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use handlers::ToolHandler;
pub use schema::{FieldKind, FieldSpec, ToolSchema};
pub use validator::{ValidatedArguments, validate};
