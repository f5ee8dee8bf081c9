//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Select text or JSON output from config
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured filter
//! - Timestamps are optional; CloudWatch stamps every line on ingestion

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `RUST_LOG` first, then the configured directives.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match (config.format, config.with_time) {
        (LogFormat::Json, true) => registry.with(fmt::layer().json()).try_init(),
        (LogFormat::Json, false) => registry
            .with(fmt::layer().json().without_time())
            .try_init(),
        (LogFormat::Text, true) => registry.with(fmt::layer()).try_init(),
        (LogFormat::Text, false) => registry
            .with(fmt::layer().without_time())
            .try_init(),
    }
}
