//! Tracing/logging initialization.
//!
//! The resolver logs its decision path at debug level by module path, so the
//! target field stays on. Secrets never reach a log line.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
