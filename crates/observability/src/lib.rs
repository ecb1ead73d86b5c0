//! Process-wide tracing setup shared by binaries and tests.

/// Initialize process-wide structured logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Log format and filter configuration.
pub mod tracing;
