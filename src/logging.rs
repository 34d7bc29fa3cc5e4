//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};
use crate::error::Error;

/// Resolve the log filter with priority: CLI > `RUST_LOG` > default.
pub fn resolve_filter(cli: Option<String>) -> String {
    cli.or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber in the configured format.
pub fn init(filter: &str, config: &LoggingConfig) -> Result<(), Error> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}
