//! Level schema types.
//!
//! A level file carries exactly five fields, all required. Decoding is
//! strict: unknown fields are rejected, so typed decoding agrees with the
//! checks in [`crate::validation`].

use serde::{Deserialize, Serialize};

/// A single game level, decoded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Level {
    /// Display name drawn at the top of the screen.
    pub name: String,
    /// RGB fill drawn behind the background image.
    pub background_color: [i64; 3],
    /// Background image file (`.png`, `.jpg`, or `.jpeg`).
    pub background_img: String,
    /// Scenery image drawn in front of the background.
    pub scenery_img: String,
    /// Music track (`.ogg`) looped while the level runs.
    pub music: String,
}
