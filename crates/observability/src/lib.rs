//! Tracing and logging (shared setup).
//!
//! Keeps subscriber wiring out of the domain crates: they carry `tracing`
//! macros at most, while the choice of format, filter, and sink lives here.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
