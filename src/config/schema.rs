//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section defaults, so an absent or empty file is a valid config.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root configuration for the function.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Log filter and output format.
    pub logging: LoggingConfig,

    /// Gateway adapter limits.
    pub gateway: GatewayConfig,

    /// Local development listener, used outside of Lambda.
    pub local: LocalConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    pub filter: String,

    /// Output format.
    pub format: LogFormat,

    /// Emit timestamps. CloudWatch adds its own ingestion time.
    pub with_time: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hello_lambda=info,tower_http=info".to_string(),
            format: LogFormat::Text,
            with_time: false,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Gateway adapter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Largest response body the adapter will buffer.
    pub max_response_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            // Synchronous Lambda invocation payload limit.
            max_response_body_bytes: 6 * 1024 * 1024,
        }
    }
}

/// Local listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LocalConfig {
    /// Serve over TCP when not running inside Lambda.
    pub enabled: bool,

    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}
