//! Logging initialization
//!
//! Thin wrapper over `tracing-subscriber` so the hosting application can
//! bring up structured logging from the same config file as the rest of
//! the platform.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// more than once is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
