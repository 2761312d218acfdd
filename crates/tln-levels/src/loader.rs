//! Level JSON file loading.

use std::path::{Path, PathBuf};

use tln_common::LevelError;
use tracing::info;

use crate::schema::Level;
use crate::validation;

/// Load and validate a level from a specific JSON file path.
///
/// The raw record is checked against the level schema before typed decoding,
/// so a broken file fails with every violation listed rather than with the
/// first decode error.
pub fn load_from_path(path: &Path) -> Result<Level, LevelError> {
    if !path.exists() {
        return Err(LevelError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LevelError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let record: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LevelError::ParseError(format!("failed to parse JSON: {e}")))?;

    let report = validation::validate(&record)?;
    if !report.is_valid() {
        return Err(LevelError::ValidationError(report.to_string()));
    }

    let level: Level = serde_json::from_value(record)
        .map_err(|e| LevelError::ParseError(format!("failed to decode level: {e}")))?;

    info!("loaded level '{}' from {}", level.name, path.display());
    Ok(level)
}

/// A directory of level files addressed by name.
///
/// `load("world-1")` reads `<base>/world-1.json`.
#[derive(Debug, Clone)]
pub struct LevelLibrary {
    base: PathBuf,
}

impl LevelLibrary {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Path of the JSON file backing the named level.
    pub fn level_path(&self, name: &str) -> PathBuf {
        self.base.join(format!("{name}.json"))
    }

    /// Load and validate the named level.
    pub fn load(&self, name: &str) -> Result<Level, LevelError> {
        load_from_path(&self.level_path(name))
    }
}

impl Default for LevelLibrary {
    fn default() -> Self {
        Self::new("data/level")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOREST: &str = r#"{
        "name": "Forest",
        "background_color": [10, 20, 30],
        "background_img": "bg.png",
        "scenery_img": "scenery.jpg",
        "music": "theme.ogg"
    }"#;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_tln_level.json"));
        assert!(matches!(result, Err(LevelError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world-1.json");
        std::fs::write(&path, FOREST).unwrap();

        let level = load_from_path(&path).unwrap();
        assert_eq!(level.name, "Forest");
        assert_eq!(level.background_color, [10, 20, 30]);
        assert_eq!(level.music, "theme.ogg");
    }

    #[test]
    fn load_invalid_json_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world-1.json");
        std::fs::write(&path, "this is not valid json {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn load_non_object_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world-1.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn load_invalid_level_returns_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world-1.json");
        std::fs::write(
            &path,
            r#"{
                "name": "Forest",
                "background_color": [10, 20, 30],
                "background_img": "bg.bmp",
                "scenery_img": "scenery.jpg"
            }"#,
        )
        .unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, LevelError::ValidationError(_)));
        let rendered = err.to_string();
        assert!(rendered.contains("music"));
        assert!(rendered.contains("background_img"));
    }

    #[test]
    fn library_resolves_level_paths() {
        let library = LevelLibrary::new("data/level");
        assert_eq!(
            library.level_path("world-1"),
            Path::new("data/level/world-1.json")
        );
    }

    #[test]
    fn library_loads_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("splash.json"), FOREST).unwrap();

        let library = LevelLibrary::new(dir.path());
        let level = library.load("splash").unwrap();
        assert_eq!(level.name, "Forest");
    }

    #[test]
    fn library_missing_level_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let library = LevelLibrary::new(dir.path());
        let err = library.load("world-9").unwrap_err();
        assert!(err.to_string().contains("world-9.json"));
    }
}
