//! Field presence checks: a level carries exactly the declared keys.

use serde_json::{Map, Value};

use super::helpers::expect_str;
use super::{Violation, LEVEL_FIELDS};

/// Report every key that is not part of the level schema.
pub(crate) fn validate_unknown_fields(violations: &mut Vec<Violation>, record: &Map<String, Value>) {
    for key in record.keys() {
        if !LEVEL_FIELDS.contains(&key.as_str()) {
            violations.push(Violation::new(key.as_str(), "unexpected field"));
        }
    }
}

/// Report every declared key that is absent.
pub(crate) fn validate_required_fields(
    violations: &mut Vec<Violation>,
    record: &Map<String, Value>,
) {
    for field in LEVEL_FIELDS {
        if !record.contains_key(field) {
            violations.push(Violation::new(field, "required field missing"));
        }
    }
}

/// The level name may be any string.
pub(crate) fn validate_name(violations: &mut Vec<Violation>, record: &Map<String, Value>) {
    if let Some(value) = record.get("name") {
        expect_str(violations, "name", value);
    }
}
