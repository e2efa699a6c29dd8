//! Argument validation against a tool's declared schema.
//!
//! The validator runs before any handler and applies the schema's rules in
//! field declaration order:
//!
//! 1. a required field that is absent fails, naming the missing field;
//! 2. a present value whose runtime kind does not match the declared kind
//!    fails, naming the field and the expected kind;
//! 3. a value outside the field's closed choice set fails;
//! 4. fields not declared in the schema pass through unchanged - handlers
//!    may read optional, undeclared fields with their own defaults.
//!
//! No coercion is performed; a numeric string is never converted to a
//! number. A `null` value satisfies no kind.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ToolError;
use super::schema::ToolSchema;

/// Arguments proven to satisfy a tool's schema.
///
/// Only the validator constructs this type, so a handler can rely on every
/// declared field being present (when required) and well-typed.
#[derive(Debug, Clone)]
pub struct ValidatedArguments(JsonObject);

impl ValidatedArguments {
    /// Decode the arguments into a typed parameter struct.
    ///
    /// Schema validation has already run, so a decode failure here is a
    /// disagreement between a tool's schema and its params struct - a
    /// server-side defect, reported as an internal error.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| ToolError::internal(format!("argument decoding failed: {}", e)))
    }

    /// Raw access to a field, including undeclared pass-through fields.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Validate raw arguments against a schema.
pub fn validate(schema: &ToolSchema, raw: JsonObject) -> Result<ValidatedArguments, ToolError> {
    for field in schema.fields() {
        match raw.get(field.name) {
            None => {
                if field.required {
                    return Err(ToolError::invalid_arguments(format!(
                        "missing required field '{}'",
                        field.name
                    )));
                }
            }
            Some(value) => {
                if !field.kind.matches(value) {
                    return Err(ToolError::invalid_arguments(format!(
                        "field '{}' must be a {}",
                        field.name,
                        field.kind.as_str()
                    )));
                }

                if let Some(allowed) = field.allowed {
                    let supplied = value.as_str().unwrap_or_default();
                    if !allowed.contains(&supplied) {
                        return Err(ToolError::invalid_arguments(format!(
                            "field '{}' must be one of {:?}, got '{}'",
                            field.name, allowed, supplied
                        )));
                    }
                }
            }
        }
    }

    Ok(ValidatedArguments(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::{FieldKind, FieldSpec};
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn schema() -> ToolSchema {
        ToolSchema::new()
            .field(FieldSpec::required("text", FieldKind::String, "Some text"))
            .field(FieldSpec::optional("count", FieldKind::Number, "A count"))
            .field(
                FieldSpec::optional("mode", FieldKind::String, "A mode")
                    .with_allowed(&["fast", "slow"]),
            )
    }

    #[test]
    fn test_accepts_valid_arguments() {
        let validated = validate(&schema(), args(json!({"text": "hi", "count": 2}))).unwrap();
        assert_eq!(validated.get("text").unwrap(), "hi");
    }

    #[test]
    fn test_missing_required_field() {
        let err = validate(&schema(), args(json!({"count": 2}))).unwrap_err();
        match err {
            ToolError::InvalidArguments(msg) => assert!(msg.contains("text")),
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let err = validate(&schema(), args(json!({"text": 42}))).unwrap_err();
        match err {
            ToolError::InvalidArguments(msg) => {
                assert!(msg.contains("text"));
                assert!(msg.contains("string"));
            }
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_no_coercion_of_numeric_strings() {
        let err = validate(&schema(), args(json!({"text": "ok", "count": "3"}))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_null_satisfies_no_kind() {
        let err = validate(&schema(), args(json!({"text": null}))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_enum_membership() {
        assert!(validate(&schema(), args(json!({"text": "x", "mode": "fast"}))).is_ok());

        let err = validate(&schema(), args(json!({"text": "x", "mode": "warp"}))).unwrap_err();
        match err {
            ToolError::InvalidArguments(msg) => assert!(msg.contains("mode")),
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_undeclared_fields_pass_through() {
        let validated =
            validate(&schema(), args(json!({"text": "x", "extra": {"a": 1}}))).unwrap();
        assert!(validated.get("extra").is_some());
    }

    #[test]
    fn test_empty_string_is_valid() {
        let validated = validate(&schema(), args(json!({"text": ""}))).unwrap();
        assert_eq!(validated.get("text").unwrap(), "");
    }

    #[test]
    fn test_parse_into_typed_struct() {
        #[derive(serde::Deserialize)]
        struct Params {
            text: String,
            count: Option<f64>,
        }

        let validated = validate(&schema(), args(json!({"text": "hi", "count": 2}))).unwrap();
        let params: Params = validated.parse().unwrap();
        assert_eq!(params.text, "hi");
        assert_eq!(params.count, Some(2.0));
    }
}
