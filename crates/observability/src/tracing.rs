//! Tracing/logging initialization.
//!
//! One JSON subscriber for the whole process, filtered through `RUST_LOG`.
//! The banking domain crates stay silent; only the persistence adapters emit
//! events, at debug level, so the default filter of `info` keeps test and
//! benchmark output clean unless the environment asks for more.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops), so every entry
/// point that might run first can call it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
