//! Asset path checks for the image and music fields.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::helpers::expect_str;
use super::Violation;

/// Matches image files ending in `.png`, `.jpg`, or `.jpeg` (case-sensitive).
static IMAGE_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(png|jpe?g)$").unwrap());

/// Matches music files ending in `.ogg` (case-sensitive).
static MUSIC_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.ogg$").unwrap());

/// An image field must be a string ending in a supported image suffix.
pub(crate) fn validate_image(
    violations: &mut Vec<Violation>,
    field: &'static str,
    record: &Map<String, Value>,
) {
    let Some(value) = record.get(field) else {
        return;
    };
    if let Some(path) = expect_str(violations, field, value) {
        if !IMAGE_FILE_RE.is_match(path) {
            violations.push(Violation::new(
                field,
                format!("'{path}' does not end in .png, .jpg, or .jpeg"),
            ));
        }
    }
}

/// The music field must be a string ending in `.ogg`.
pub(crate) fn validate_music(violations: &mut Vec<Violation>, record: &Map<String, Value>) {
    let Some(value) = record.get("music") else {
        return;
    };
    if let Some(path) = expect_str(violations, "music", value) {
        if !MUSIC_FILE_RE.is_match(path) {
            violations.push(Violation::new(
                "music",
                format!("'{path}' does not end in .ogg"),
            ));
        }
    }
}
