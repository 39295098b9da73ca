//! Subscriber setup. Logs go to stderr so stdout stays machine-readable.

use std::sync::Once;

use topics_core::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let _ = match format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    });
}
