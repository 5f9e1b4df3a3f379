//! Settings schema.
//!
//! All fields derive Serde traits so a plugin can ship its logger settings
//! as a TOML file next to its script.

use serde::{Deserialize, Serialize};

/// Logger settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Prefix put in front of every message.
    pub prefix: String,

    /// Folder debug dumps are written to. Derived from the script location when absent.
    pub debug_log_path: Option<String>,
}
