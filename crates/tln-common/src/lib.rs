pub mod errors;

pub use errors::LevelError;

pub type Result<T> = std::result::Result<T, LevelError>;
