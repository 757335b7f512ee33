//! Logging setup
//!
//! Human-readable tracing output on stderr. stdout carries only the JSON
//! report, so nothing here may write to it.

use crate::cli::Verbosity;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity-derived filter
pub const LOG_ENV: &str = "STUNTCHECK_LOG";

/// Filter from `STUNTCHECK_LOG` if set, otherwise from `verbosity`
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
