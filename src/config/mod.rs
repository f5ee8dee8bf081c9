//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! HELLO_LAMBDA_CONFIG (optional TOML file)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at cold start and never reloaded
//! - All fields have defaults so the function runs with no config at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{GatewayConfig, LocalConfig, LogFormat, LoggingConfig, ServiceConfig};
pub use validation::ValidationError;
