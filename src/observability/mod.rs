//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger (no host context, debug dump events)
//!     → tracing events
//!     → logging.rs subscriber (stderr/stdout via tracing-subscriber fmt)
//! ```
//!
//! # Design Decisions
//! - Host system log is the primary sink; tracing is the local fallback
//! - Embedders that already own a subscriber simply skip `init_logging`

pub mod logging;

pub use logging::init_logging;
