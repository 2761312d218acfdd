//! Background color shape checks.

use serde_json::{Map, Value};

use super::helpers::json_type_name;
use super::Violation;

/// Number of channels in a background color (RGB).
const COLOR_CHANNELS: usize = 3;

/// The background color must be an array of exactly three integers.
/// Channel values are not range-checked.
pub(crate) fn validate_background_color(
    violations: &mut Vec<Violation>,
    record: &Map<String, Value>,
) {
    let Some(value) = record.get("background_color") else {
        return;
    };
    let Some(entries) = value.as_array() else {
        violations.push(Violation::new(
            "background_color",
            format!(
                "expected an array of integers, found {}",
                json_type_name(value)
            ),
        ));
        return;
    };

    if entries.len() != COLOR_CHANNELS {
        violations.push(Violation::new(
            "background_color",
            format!(
                "expected exactly {COLOR_CHANNELS} entries, found {}",
                entries.len()
            ),
        ));
    }
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_i64() && !entry.is_u64() {
            violations.push(Violation::new(
                "background_color",
                format!("entry {index} is not an integer (found {})", json_type_name(entry)),
            ));
        }
    }
}
