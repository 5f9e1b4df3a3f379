//! Plugin logger.
//!
//! # Data Flow
//! ```text
//! plugin code
//!     → Logger::log ("<prefix> : <message>")
//!         → HostContext::system_log (context set)
//!         → tracing warning (context unset)
//!     → Logger::log_object → dump.rs → one log entry per section
//!     → Logger::debug_object → dump.rs → debug_file.rs → <debug path>debug.log
//! ```
//!
//! # Design Decisions
//! - Every public method is fail-soft: misuse and I/O failures become warnings
//! - Methods return `&mut Self` so calls chain
//! - An explicitly set debug path always wins over one derived from the context

pub mod debug_file;
pub mod dump;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LoggerSettings;
use crate::host::{value_kind, HostContext, HostObject, HostValue};

pub use debug_file::{DumpError, DumpResult, DEBUG_FILE_NAME};

/// Separator between prefix and message.
pub const PREFIX_SEPARATOR: &str = " : ";

/// Name of the folder derived next to the plugin script.
pub const DEBUG_DIR_NAME: &str = "debug";

/// Prefixing logger for a single plugin invocation.
///
/// # Example
///
/// ```ignore
/// let mut logger = Logger::new();
/// logger.set_prefix("my-plugin").set_context(context);
///
/// logger.log("Hello world!");
/// logger.log_object(&layer);
/// logger.debug_object(&layer);
/// ```
pub struct Logger {
    context: Option<Box<dyn HostContext>>,
    prefix: String,
    debug_log_path: Option<PathBuf>,
}

impl Logger {
    /// Create a logger with no context, a blank prefix and no debug path.
    pub fn new() -> Self {
        Self {
            context: None,
            prefix: String::new(),
            debug_log_path: None,
        }
    }

    /// Create a logger from loaded settings.
    ///
    /// Values go through the regular setters, so they are validated and
    /// normalized the same way.
    pub fn with_settings(settings: &LoggerSettings) -> Self {
        let mut logger = Self::new();
        logger.set_prefix(settings.prefix.as_str());
        if let Some(path) = &settings.debug_log_path {
            logger.set_debug_log_path(path.as_str());
        }
        logger
    }

    /// Current message prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current debug folder, always ending in `/`.
    pub fn debug_log_path(&self) -> Option<&Path> {
        self.debug_log_path.as_deref()
    }

    /// Full path of the dump file, if a debug folder is known.
    pub fn debug_file_path(&self) -> Option<PathBuf> {
        self.debug_log_path
            .as_deref()
            .map(|dir| dir.join(DEBUG_FILE_NAME))
    }

    /// Whether a host context has been set.
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Set the prefix put in front of every message.
    pub fn set_prefix(&mut self, prefix: impl Into<HostValue>) -> &mut Self {
        let value: HostValue = prefix.into();
        match value {
            HostValue::String(prefix) => {
                self.prefix = prefix;
                self
            }
            other => self.log(format!(
                "Prefix must be a string. Called `set_prefix` with a value of type {}.",
                value_kind(&other)
            )),
        }
    }

    /// Set the host context.
    ///
    /// Derives the debug folder from the script location unless one is already set.
    /// A script path without a parent folder (`"script.js"`) leaves it unset.
    pub fn set_context<C>(&mut self, context: C) -> &mut Self
    where
        C: HostContext + 'static,
    {
        if self.debug_log_path.is_none() {
            let script_path = context.script_path();
            self.debug_log_path = derive_debug_log_path(&script_path);
            if self.debug_log_path.is_none() {
                tracing::debug!(
                    script_path = ?script_path,
                    "Script path has no parent folder, debug path left unset"
                );
            }
        }

        self.context = Some(Box::new(context));
        self
    }

    /// Set the folder debug dumps are written to.
    ///
    /// An empty string is refused with a warning instead of being stored as `/`,
    /// which would put dumps at the filesystem root.
    pub fn set_debug_log_path(&mut self, path: impl Into<HostValue>) -> &mut Self {
        let value: HostValue = path.into();
        match value {
            HostValue::String(path) if !path.is_empty() => {
                self.debug_log_path = Some(PathBuf::from(with_trailing_slash(&path)));
                self
            }
            HostValue::String(_) => {
                self.log("Debug log path must not be empty. Called `set_debug_log_path` with \"\".")
            }
            other => self.log(format!(
                "Debug log path must be a string. \
                 Called `set_debug_log_path` with a value of type {}.",
                value_kind(&other)
            )),
        }
    }

    /// Log a message to the host system log.
    pub fn log(&mut self, message: impl Into<HostValue>) -> &mut Self {
        let value: HostValue = message.into();
        match value {
            HostValue::String(message) => {
                self.forward(&message);
                self
            }
            other => self.log(format!(
                "Message must be a string. Called `log` with a value of type {}.",
                value_kind(&other)
            )),
        }
    }

    /// Dump an object's reflection data to the system log, one entry per section.
    pub fn log_object(&mut self, obj: &dyn HostObject) -> &mut Self {
        for entry in dump::log_entries(obj) {
            self.log(entry);
        }
        self
    }

    /// Dump an object's reflection data to `<debug path>debug.log`.
    ///
    /// Use this when the dump is too large for the system log viewer.
    pub fn debug_object(&mut self, obj: &dyn HostObject) -> &mut Self {
        let Some(dir) = self.debug_log_path.clone() else {
            return self.log("Debug log path not set. Set it with `set_debug_log_path`.");
        };

        let contents = dump::debug_text(obj);
        match debug_file::write_debug_file(&dir, &contents) {
            Ok(_) => self,
            Err(e) => self.log(format!("Debug dump skipped. {}", e)),
        }
    }

    fn forward(&self, message: &str) {
        match &self.context {
            Some(context) => {
                let line = format!("{}{}{}", self.prefix, PREFIX_SEPARATOR, message);
                context.system_log().write(&line);
            }
            None => {
                tracing::warn!(
                    prefix = %self.prefix,
                    dropped = %message,
                    "Context not set for plugin logger. Set it with `set_context`"
                );
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_context", &self.has_context())
            .field("prefix", &self.prefix)
            .field("debug_log_path", &self.debug_log_path)
            .finish()
    }
}

fn with_trailing_slash(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

/// `<parent of script>/debug/`, or `None` when the script has no parent folder.
fn derive_debug_log_path(script_path: &Path) -> Option<PathBuf> {
    let parent = script_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())?;

    // Joining "" appends the trailing separator.
    Some(parent.join(DEBUG_DIR_NAME).join(""))
}
