//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject values the setters would refuse at runtime
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerSettings → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::LoggerSettings;

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `debug_log_path` is present but empty.
    EmptyDebugLogPath,
    /// `prefix` would split one message across several system log lines.
    MultilinePrefix,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyDebugLogPath => write!(f, "debug_log_path must not be empty"),
            ValidationError::MultilinePrefix => write!(f, "prefix must be a single line"),
        }
    }
}

/// Check settings, collecting every problem found.
pub fn validate_settings(settings: &LoggerSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.prefix.contains(['\n', '\r']) {
        errors.push(ValidationError::MultilinePrefix);
    }

    if settings.debug_log_path.as_deref() == Some("") {
        errors.push(ValidationError::EmptyDebugLogPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
