//! Cold-start orchestration.
//!
//! # Responsibilities
//! - Build the router exactly once, before any invocation is accepted
//! - Contain construction faults (errors and panics) behind a barrier
//!
//! # Design Decisions
//! - Construction failure is not fatal: the process keeps running and
//!   every invocation answers 500 "Lambda not initialized"
//! - The result is an immutable `App` handed to the invocation handler

use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::{BoxError, Router};
use thiserror::Error;

use crate::routing::{build_router, recovery::panic_message};

/// Faults while constructing the router.
#[derive(Debug, Error)]
pub enum InitError {
    /// The router factory returned an error.
    #[error("router construction failed: {0}")]
    Factory(BoxError),

    /// The router factory panicked.
    #[error("PANIC during init: {0}")]
    Panicked(String),
}

/// Process-wide application state, built once at cold start.
#[derive(Clone, Debug, Default)]
pub struct App {
    router: Option<Router>,
}

impl App {
    /// Bootstrap with the standard route table.
    pub fn build() -> Self {
        bootstrap(|| Ok(build_router()))
    }

    /// An application whose initialization failed.
    pub fn uninitialized() -> Self {
        Self { router: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.router.is_some()
    }

    pub fn into_router(self) -> Option<Router> {
        self.router
    }
}

/// Run a router factory behind a failure barrier.
pub fn try_bootstrap<F>(factory: F) -> Result<Router, InitError>
where
    F: FnOnce() -> Result<Router, BoxError>,
{
    match catch_unwind(AssertUnwindSafe(factory)) {
        Ok(Ok(router)) => Ok(router),
        Ok(Err(e)) => Err(InitError::Factory(e)),
        Err(payload) => Err(InitError::Panicked(
            panic_message(payload.as_ref()).to_string(),
        )),
    }
}

/// Run a router factory, logging the outcome. Never fails.
pub fn bootstrap<F>(factory: F) -> App
where
    F: FnOnce() -> Result<Router, BoxError>,
{
    tracing::info!("=== Lambda Cold Start ===");

    match try_bootstrap(factory) {
        Ok(router) => {
            tracing::info!("=== Lambda Initialized Successfully ===");
            App {
                router: Some(router),
            }
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Initialization failed; invocations will report not initialized"
            );
            App::uninitialized()
        }
    }
}
