//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (body limit > 0, bind address parses)
//! - Check the log filter compiles before logging is initialized
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logging.filter must not be empty")]
    EmptyLogFilter,

    #[error("logging.filter '{filter}' is invalid: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("gateway.max_response_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("local.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let filter = config.logging.filter.trim();
    if filter.is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    } else if let Err(e) = EnvFilter::try_new(filter) {
        errors.push(ValidationError::InvalidLogFilter {
            filter: filter.to_string(),
            reason: e.to_string(),
        });
    }

    if config.gateway.max_response_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    // Only matters when the local listener may actually bind.
    if config.local.enabled && config.local.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.local.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.logging.filter = "  ".into();
        config.gateway.max_response_body_bytes = 0;
        config.local.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyLogFilter,
                ValidationError::ZeroBodyLimit,
                ValidationError::InvalidBindAddress("not-an-address".into()),
            ]
        );
    }

    #[test]
    fn test_bind_address_ignored_when_local_disabled() {
        let mut config = ServiceConfig::default();
        config.local.enabled = false;
        config.local.bind_address = "nope".into();
        assert!(validate_config(&config).is_ok());
    }
}
