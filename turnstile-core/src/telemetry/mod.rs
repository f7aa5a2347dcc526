//! Tracing subscriber setup for host applications.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, reading the `TURNSTILE_LOG`
/// env-filter. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TURNSTILE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
