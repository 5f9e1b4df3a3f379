//! Logger settings.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerSettings
//!     → Logger::with_settings
//! ```
//!
//! # Design Decisions
//! - Exactly two settings: the message prefix and the debug dump folder
//! - All fields have defaults so an empty file is valid

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, parse_settings, ConfigError};
pub use schema::LoggerSettings;
