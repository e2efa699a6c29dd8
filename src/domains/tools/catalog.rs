//! Tool catalog - the immutable, process-lifetime table of tool descriptors.
//!
//! The catalog maps tool name to `{descriptor, schema, handler}`, is built
//! once at startup, and is never mutated afterwards, so it can be shared
//! behind an `Arc` and read concurrently without locking. Iteration order is
//! registration order; clients may depend on it for display.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::{
    AddNumbersTool, EchoTool, FileOperationsTool, GetTimeTool, HttpRequestTool,
    JsonPlaceholderTool, MultiplyNumbersTool, WeatherApiTool,
};
use super::handlers::ToolHandler;
use super::schema::ToolSchema;

/// One registered tool: its wire descriptor, schema, and handler.
pub struct CatalogEntry {
    /// Wire descriptor advertised in `tools/list`.
    pub tool: Tool,

    /// Input schema the validator enforces.
    pub schema: ToolSchema,

    /// The handler invoked with validated arguments.
    pub handler: Box<dyn ToolHandler>,
}

impl CatalogEntry {
    fn new(handler: Box<dyn ToolHandler>) -> Self {
        let schema = handler.schema();
        let tool = Tool {
            name: handler.name().into(),
            description: Some(handler.description().into()),
            input_schema: Arc::new(schema.json_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };

        Self {
            tool,
            schema,
            handler,
        }
    }
}

/// The tool descriptor catalog.
pub struct ToolCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
}

impl ToolCatalog {
    /// Build the catalog of built-in tools.
    ///
    /// Registration order here is the order clients see in `tools/list`.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.register(Box::new(EchoTool));
        catalog.register(Box::new(AddNumbersTool));
        catalog.register(Box::new(MultiplyNumbersTool));
        catalog.register(Box::new(GetTimeTool));
        catalog.register(Box::new(FileOperationsTool));
        catalog.register(Box::new(HttpRequestTool::new()));
        catalog.register(Box::new(WeatherApiTool::new()));
        catalog.register(Box::new(JsonPlaceholderTool::new()));

        catalog
    }

    /// Create an empty catalog.
    pub(crate) fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a handler. Duplicate names are a programming error.
    pub(crate) fn register(&mut self, handler: Box<dyn ToolHandler>) {
        let name = handler.name();
        assert!(
            !self.index.contains_key(name),
            "duplicate tool registration: {}",
            name
        );
        self.index.insert(name, self.entries.len());
        self.entries.push(CatalogEntry::new(handler));
    }

    /// Look up an entry by tool name.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// All tool descriptors, in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
