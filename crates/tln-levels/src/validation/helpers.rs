//! Shared value-shape helpers used by the field validators.

use serde_json::Value;

use super::Violation;

/// Human-readable JSON type name for diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Push a violation and return `None` unless `value` is a string.
pub(crate) fn expect_str<'a>(
    violations: &mut Vec<Violation>,
    field: &str,
    value: &'a Value,
) -> Option<&'a str> {
    match value.as_str() {
        Some(s) => Some(s),
        None => {
            violations.push(Violation::new(
                field,
                format!("expected a string, found {}", json_type_name(value)),
            ));
            None
        }
    }
}
