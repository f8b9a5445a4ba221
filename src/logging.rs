//! Diagnostic logging
//!
//! Library code only emits `tracing` events. The binary installs a `fmt`
//! subscriber on standard error whose filter comes from `MODITEXT_LOG` or,
//! failing that, from the `logging.filter` configuration key (`off` by
//! default, so the usage line stays alone on standard error).

use crate::config::LoggingConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `moditext=debug`.
pub const LOG_ENV: &str = "MODITEXT_LOG";

/// Resolve the filter: environment first, configuration second.
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber. Later calls keep the subscriber already
/// installed.
pub fn init(config: &LoggingConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();

    if let Err(error) = installed {
        debug!(%error, "keeping existing subscriber");
    }
}
