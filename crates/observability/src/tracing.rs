//! Tracing/logging initialization.
//!
//! Logs are emitted as JSON lines; the filter comes from `RUST_LOG` and falls
//! back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Resolve the filter from the environment.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber as the global default.
///
/// Returns `false` when a subscriber was already installed.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_current_span(true)
        .try_init()
        .is_ok()
}

pub fn init() {
    let _ = try_init();
}
