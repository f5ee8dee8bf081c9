//! Shutdown signal for the local listener.
//!
//! Inside Lambda the runtime owns the process lifecycle; this is only
//! used when serving over TCP.

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
    }
}
