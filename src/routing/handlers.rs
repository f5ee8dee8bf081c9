//! Route handlers.
//!
//! Both handlers are pure: the health check takes no input and the
//! greeting echoes only the request path and method.

use axum::{
    http::{Method, Uri},
    Json,
};
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Body of `GET /api/v1/hello`.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub path: String,
    pub method: String,
}

pub const GREETING: &str = "hello world";

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// `GET /api/v1/hello`
///
/// The echoed path never includes the query string.
pub async fn hello(method: Method, uri: Uri) -> Json<Greeting> {
    tracing::debug!(method = %method, path = %uri.path(), "Hello handler called");

    Json(Greeting {
        message: GREETING,
        path: uri.path().to_string(),
        method: method.to_string(),
    })
}
