//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with report output on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `FINTRACK_LOG=debug`
pub const LOG_ENV: &str = "FINTRACK_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The filter comes from `FINTRACK_LOG`, then `RUST_LOG`, and defaults to
/// warnings only. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
