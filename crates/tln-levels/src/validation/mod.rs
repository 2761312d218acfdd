//! Level record validation.
//!
//! Checks a decoded JSON value against the level schema: the five declared
//! fields must all be present, nothing else may appear, and each field must
//! have the right shape. Each domain has its own submodule; this orchestrator
//! calls them all and collects every violation into a single
//! [`ValidationReport`] rather than stopping at the first problem.

mod assets;
mod color;
mod fields;
mod helpers;


use std::fmt;

use serde_json::Value;
use tln_common::LevelError;

/// The five fields every level file must declare, in schema order.
pub const LEVEL_FIELDS: [&str; 5] = [
    "name",
    "background_color",
    "background_img",
    "scenery_img",
    "music",
];

/// A single schema violation, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating one level record.
///
/// Violations are ordered by check: unknown fields, then missing fields,
/// then per-field shape and pattern checks in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when the record satisfies the level schema.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Validate a decoded level record against the level schema.
///
/// Collects all violations in one pass. Suffix checks on the image and music
/// fields are case-sensitive, so `bg.JPG` is rejected. The only hard error is
/// a record that is not a JSON object at all; that is a parse-level problem,
/// not a schema violation.
pub fn validate(record: &Value) -> Result<ValidationReport, LevelError> {
    let Some(map) = record.as_object() else {
        return Err(LevelError::ParseError(format!(
            "level data is not a JSON object (found {})",
            helpers::json_type_name(record)
        )));
    };

    let mut violations: Vec<Violation> = Vec::new();

    fields::validate_unknown_fields(&mut violations, map);
    fields::validate_required_fields(&mut violations, map);
    fields::validate_name(&mut violations, map);
    color::validate_background_color(&mut violations, map);
    assets::validate_image(&mut violations, "background_img", map);
    assets::validate_image(&mut violations, "scenery_img", map);
    assets::validate_music(&mut violations, map);

    Ok(ValidationReport { violations })
}
