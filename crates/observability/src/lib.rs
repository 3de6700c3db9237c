//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing with JSON lines instead of the human-readable format.
pub fn init_json() {
    tracing::init_json();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
