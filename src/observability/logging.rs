//! Local logging channel.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber that receives warnings the host log can't
//! - Configure log level from the environment
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the default directive
//! - Initialization is idempotent: a plugin reloaded in the same process keeps
//!   the first subscriber instead of panicking

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "sketch_plugin_log=info";

/// Build the env filter, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok()
}
