//! Prefixing logger for design-tool plugins.
//!
//! Forwards messages to the host's system log and dumps host object
//! introspection either to the system log or to a `debug.log` file.
//! Every operation is fail-soft: a misused or unconfigured logger warns and
//! carries on instead of taking the plugin down.

pub mod config;
pub mod host;
pub mod logger;
pub mod observability;

pub use config::LoggerSettings;
pub use host::{HostContext, HostObject, HostValue, ReflectionCategory, SystemLog};
pub use logger::Logger;
