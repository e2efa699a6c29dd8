//! Structural input schemas for tool descriptors.
//!
//! Each tool declares its input contract as an ordered list of fields, each
//! with a primitive kind, a required flag, and optionally a closed set of
//! allowed values. The same table drives both the argument validator and the
//! JSON Schema advertised to clients in `tools/list`.

use rmcp::model::JsonObject;
use serde_json::{Value, json};

/// Primitive kind a schema field accepts.
///
/// Mirrors the JSON type system at the granularity the validator checks:
/// no coercion between kinds is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Object,
}

impl FieldKind {
    /// Name used in the wire schema and in validation error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }

    /// Check whether a JSON value has this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
        }
    }
}

/// One declared field of a tool's input schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as it appears in the arguments object.
    pub name: &'static str,

    /// Primitive kind the value must have when present.
    pub kind: FieldKind,

    /// Whether the field must be present.
    pub required: bool,

    /// Closed set of allowed values, if the field is an enumeration.
    pub allowed: Option<&'static [&'static str]>,

    /// Human-readable description shown to clients.
    pub description: &'static str,
}

impl FieldSpec {
    /// Declare a required field.
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            allowed: None,
            description,
        }
    }

    /// Declare an optional field.
    pub fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            allowed: None,
            description,
        }
    }

    /// Restrict the field to a closed set of allowed values.
    pub fn with_allowed(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }
}

/// A tool's complete input schema: an ordered field table.
///
/// Field order is the declaration order, and the validator applies its
/// rules in that order.
#[derive(Debug, Clone, Default)]
pub struct ToolSchema {
    fields: Vec<FieldSpec>,
}

impl ToolSchema {
    /// Create an empty schema (a tool taking no declared arguments).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field to the schema.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        debug_assert!(
            !self.fields.iter().any(|f| f.name == spec.name),
            "duplicate schema field '{}'",
            spec.name
        );
        self.fields.push(spec);
        self
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Render the schema as the JSON Schema object advertised to clients.
    pub fn json_schema(&self) -> JsonObject {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), json!(field.kind.as_str()));
            prop.insert("description".to_string(), json!(field.description));
            if let Some(allowed) = field.allowed {
                prop.insert("enum".to_string(), json!(allowed));
            }
            properties.insert(field.name.to_string(), Value::Object(prop));

            if field.required {
                required.push(field.name);
            }
        }

        let mut schema = serde_json::Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> ToolSchema {
        ToolSchema::new()
            .field(FieldSpec::required(
                "operation",
                FieldKind::String,
                "Operation to perform",
            )
            .with_allowed(&["read", "write"]))
            .field(FieldSpec::optional(
                "content",
                FieldKind::String,
                "Content to write",
            ))
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let schema = sample_schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["operation", "content"]);
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = sample_schema().json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["operation"]));
        assert_eq!(schema["properties"]["operation"]["type"], "string");
        assert_eq!(
            schema["properties"]["operation"]["enum"],
            json!(["read", "write"])
        );
        assert!(schema["properties"]["content"].is_object());
    }

    #[test]
    fn test_kind_matches() {
        assert!(FieldKind::String.matches(&json!("x")));
        assert!(FieldKind::Number.matches(&json!(1.5)));
        assert!(FieldKind::Number.matches(&json!(3)));
        assert!(FieldKind::Boolean.matches(&json!(true)));
        assert!(FieldKind::Object.matches(&json!({})));

        // No coercion: a numeric string is not a number
        assert!(!FieldKind::Number.matches(&json!("3")));
        assert!(!FieldKind::String.matches(&json!(3)));
        // null satisfies no kind
        assert!(!FieldKind::String.matches(&Value::Null));
        assert!(!FieldKind::Object.matches(&Value::Null));
    }

    #[test]
    fn test_empty_schema() {
        let schema = ToolSchema::new().json_schema();
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"], json!({}));
    }
}
