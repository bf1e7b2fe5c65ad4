//! Logging setup for the mediacat binary
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a log filter, e.g. `MEDIACAT_LOG=mediacat=debug`
pub const LOG_ENV: &str = "MEDIACAT_LOG";

/// Install the global subscriber
///
/// The filter comes from `MEDIACAT_LOG` when set and valid, otherwise from
/// `default_filter` (normally the configured `log_level`).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
