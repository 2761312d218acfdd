//! Level configuration for the TLN Power platformer.
//!
//! Levels are JSON files naming a background color, two image layers, and a
//! music track. This crate decodes them, checks them against the level
//! schema, and hands a typed [`Level`] to the engine. Validation collects
//! every violation in one pass so a broken level file reports all of its
//! problems at once.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tln_levels::LevelLibrary;
//!
//! let library = LevelLibrary::default();
//! let level = library.load("world-1").expect("failed to load level");
//! println!("{}", level.name);
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use loader::{load_from_path, LevelLibrary};
pub use schema::Level;
pub use validation::{validate, ValidationReport, Violation, LEVEL_FIELDS};
