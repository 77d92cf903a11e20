//! Tracing setup for the `payday` binary
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedding applications keep control of their own.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "PAYDAY_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber, writing to stderr
///
/// `PAYDAY_LOG` wins over `default_filter`. An unparseable filter falls
/// back to `payday=warn`. Calls after the first are no-ops.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("payday=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
