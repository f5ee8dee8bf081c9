//! Route table construction.
//!
//! # Responsibilities
//! - Register the fixed route table
//! - Wrap it in the middleware chain (trace, panic recovery)
//!
//! # Design Decisions
//! - Built once at cold start, immutable afterwards
//! - Unmatched paths fall through to axum's default 404

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::routing::handlers::{health, hello};
use crate::routing::recovery::panic_response;

pub const HEALTH_PATH: &str = "/health";
pub const HELLO_PATH: &str = "/api/v1/hello";

/// Build the application router.
pub fn build_router() -> Router {
    with_middleware(
        Router::new()
            .route(HEALTH_PATH, get(health))
            .route(HELLO_PATH, get(hello)),
    )
}

/// Apply the middleware chain to a route table.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
