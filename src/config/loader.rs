//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{LogFormat, ServiceConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Names an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "HELLO_LAMBDA_CONFIG";
/// Overrides `logging.format`.
pub const LOG_FORMAT_ENV: &str = "HELLO_LAMBDA_LOG_FORMAT";
/// Overrides `local.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "HELLO_LAMBDA_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load configuration from the process environment.
///
/// Reads the file named by [`CONFIG_PATH_ENV`] if set, applies the
/// environment overrides, then validates the result.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    load_with(|var| std::env::var(var).ok())
}

/// Same as [`load_from_env`] with an injectable variable lookup.
pub fn load_with<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_ENV) {
        Some(path) if !path.trim().is_empty() => read_config(Path::new(path.trim()))?,
        _ => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides on top of a loaded config.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(format) = lookup(LOG_FORMAT_ENV) {
        config.logging.format = format
            .parse::<LogFormat>()
            .map_err(|reason| ConfigError::Env {
                var: LOG_FORMAT_ENV,
                reason,
            })?;
    }

    if let Some(address) = lookup(BIND_ADDRESS_ENV) {
        config.local.bind_address = address;
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
