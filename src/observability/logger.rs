//! Structured JSON logging
//!
//! One log line = one event, emitted as JSON on stdout through
//! `tracing-subscriber`. Verbosity comes from `RUST_LOG` when set, otherwise
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "hangar=info,tower_http=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Returns `false` if one was already installed (e.g. by a test harness).
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}
