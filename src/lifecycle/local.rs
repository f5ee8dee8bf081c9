//! Local development listener.
//!
//! # Responsibilities
//! - Detect whether the process runs inside Lambda
//! - Serve the same router over plain TCP otherwise
//!
//! # Design Decisions
//! - Same router, same middleware: local behavior matches Lambda behavior
//! - Graceful shutdown on Ctrl+C

use std::io;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::LocalConfig;
use crate::lifecycle::shutdown::shutdown_signal;

/// Set by the Lambda service in every execution environment.
pub const RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

/// True when the Lambda Runtime API is reachable.
pub fn is_lambda_environment() -> bool {
    std::env::var_os(RUNTIME_API_ENV).is_some()
}

/// Serve locally instead of entering the runtime loop.
pub fn should_serve_locally(config: &LocalConfig) -> bool {
    config.enabled && !is_lambda_environment()
}

/// Bind `config.bind_address` and serve until Ctrl+C.
pub async fn run(router: Router, config: &LocalConfig) -> io::Result<()> {
    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    serve(router, listener).await
}

/// Serve on an already bound listener until Ctrl+C.
pub async fn serve(router: Router, listener: TcpListener) -> io::Result<()> {
    tracing::info!(address = %listener.local_addr()?, "Local listener starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Local listener stopped");
    Ok(())
}
