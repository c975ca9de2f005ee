//! Tracing setup for the serverless entrypoints.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber once per process.
///
/// Vercel keeps a warm process between invocations, so an entrypoint may
/// reach this more than once; later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "ecoquiz_api=info".into()),
            )
            .with_target(false)
            .init();
    });
}
