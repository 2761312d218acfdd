use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("level parse error: {0}")]
    ParseError(String),

    #[error("level validation error: {0}")]
    ValidationError(String),
}
