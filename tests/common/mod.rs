//! Shared utilities for integration tests.

use hello_lambda::config::GatewayConfig;
use hello_lambda::gateway::{GatewayEvent, GatewayResponse, InvocationHandler};
use hello_lambda::lifecycle::App;
use lambda_runtime::Context;
use serde_json::Value;

/// Handler wired to the production router.
#[allow(dead_code)]
pub fn handler() -> InvocationHandler {
    InvocationHandler::new(App::build(), &GatewayConfig::default())
}

/// A Lambda context with a fixed request ID.
#[allow(dead_code)]
pub fn context() -> Context {
    let mut context = Context::default();
    context.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
    context
}

/// Invoke and return status plus the parsed JSON body.
#[allow(dead_code)]
pub async fn invoke<S>(handler: &InvocationHandler<S>, event: GatewayEvent) -> (u16, Value)
where
    S: tower::Service<
            axum::http::Request<axum::body::Body>,
            Response = axum::http::Response<axum::body::Body>,
        > + Clone
        + Send
        + Sync
        + 'static,
    S::Error: Into<axum::BoxError>,
    S::Future: Send,
{
    let response = handler.handle(event, context()).await;
    (response.status_code, json_body(&response))
}

/// Parse an envelope body as JSON.
#[allow(dead_code)]
pub fn json_body(response: &GatewayResponse) -> Value {
    serde_json::from_str(&response.body).unwrap_or(Value::Null)
}
