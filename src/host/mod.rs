//! Host collaborator seams.
//!
//! # Responsibilities
//! - Describe what the embedding plugin runtime hands the logger
//! - Model the dynamic values a scripting host passes across the boundary
//!
//! # Design Decisions
//! - The host is reached only through traits, so tests run without a runtime
//! - Host values are `serde_json::Value`; anything that isn't a string is misuse

pub mod reflect;

use std::path::PathBuf;

pub use reflect::{HostObject, ReflectionCategory};

/// A dynamically typed value received from the host runtime.
pub type HostValue = serde_json::Value;

/// The host's system log.
pub trait SystemLog {
    /// Write one entry to the system log.
    fn write(&self, message: &str);
}

impl<F> SystemLog for F
where
    F: Fn(&str),
{
    fn write(&self, message: &str) {
        self(message)
    }
}

/// Handle the runtime gives a plugin at startup.
pub trait HostContext {
    /// Path of the currently executing plugin script.
    fn script_path(&self) -> PathBuf;

    /// Accessor for the host's system log.
    fn system_log(&self) -> &dyn SystemLog;
}

/// Short type name used in misuse warnings.
pub fn value_kind(value: &HostValue) -> &'static str {
    match value {
        HostValue::Null => "null",
        HostValue::Bool(_) => "boolean",
        HostValue::Number(_) => "number",
        HostValue::String(_) => "string",
        HostValue::Array(_) => "array",
        HostValue::Object(_) => "object",
    }
}
