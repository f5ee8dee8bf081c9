//! Invocation handler.
//!
//! # Responsibilities
//! - Accept one gateway event plus the Lambda context
//! - Short-circuit when the router was never built
//! - Dispatch to the router and translate the result
//! - Convert every fault (error or panic) into a fixed 500 envelope
//!
//! # Design Decisions
//! - `handle` is infallible: no fault crosses the invocation boundary
//! - Generic over any tower `Service` so dispatch faults can be injected
//! - Fault categories are not distinguished; every failure is a 500

use std::panic::AssertUnwindSafe;

use axum::{
    body::Body,
    http::{Request, Response},
    BoxError, Router,
};
use futures_util::FutureExt;
use lambda_runtime::{Context, LambdaEvent};
use tower::{Service, ServiceExt};
use tracing::Instrument;

use crate::config::GatewayConfig;
use crate::gateway::request::into_http_request;
use crate::gateway::response::{NOT_INITIALIZED, PROCESSING_FAILED};
use crate::gateway::types::{GatewayError, GatewayEvent, GatewayResponse, GatewayResult};
use crate::lifecycle::App;
use crate::routing::recovery::panic_message;

/// Handles gateway invocations against a router built at cold start.
#[derive(Clone)]
pub struct InvocationHandler<S = Router> {
    service: Option<S>,
    body_limit: usize,
}

impl InvocationHandler<Router> {
    /// Create a handler from the bootstrapped application.
    pub fn new(app: App, config: &GatewayConfig) -> Self {
        Self::from_service(app.into_router(), config)
    }
}

impl<S> InvocationHandler<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send,
{
    /// Create a handler around any request service. `None` means
    /// initialization failed.
    pub fn from_service(service: Option<S>, config: &GatewayConfig) -> Self {
        Self {
            service,
            body_limit: config.max_response_body_bytes,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.service.is_some()
    }

    /// Runtime-facing entry point. Always returns `Ok`.
    pub async fn call(
        &self,
        event: LambdaEvent<GatewayEvent>,
    ) -> Result<GatewayResponse, lambda_runtime::Error> {
        Ok(self.handle(event.payload, event.context).await)
    }

    /// Handle one invocation.
    pub async fn handle(&self, event: GatewayEvent, context: Context) -> GatewayResponse {
        let span = tracing::info_span!("invocation", request_id = %context.request_id);

        async move {
            tracing::info!(method = %event.http_method, path = %event.path_or_root(), "Request");

            let response = match AssertUnwindSafe(self.dispatch(event, context))
                .catch_unwind()
                .await
            {
                Ok(response) => response,
                Err(payload) => {
                    tracing::error!(
                        panic = %panic_message(payload.as_ref()),
                        "PANIC during request handling"
                    );
                    GatewayResponse::error(PROCESSING_FAILED)
                }
            };

            tracing::info!(status = response.status_code, "Response");
            response
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, event: GatewayEvent, context: Context) -> GatewayResponse {
        let Some(service) = self.service.clone() else {
            tracing::error!("Router not initialized");
            return GatewayResponse::error(NOT_INITIALIZED);
        };

        match proxy(service, event, context, self.body_limit).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Error processing request");
                GatewayResponse::error(PROCESSING_FAILED)
            }
        }
    }
}

/// Translate, dispatch, and translate back.
async fn proxy<S>(
    service: S,
    event: GatewayEvent,
    context: Context,
    body_limit: usize,
) -> GatewayResult<GatewayResponse>
where
    S: Service<Request<Body>, Response = Response<Body>>,
    S::Error: Into<BoxError>,
{
    let mut request = into_http_request(event)?;
    request.extensions_mut().insert(context);

    let response = service
        .oneshot(request)
        .await
        .map_err(|e| GatewayError::Dispatch(e.into()))?;

    GatewayResponse::from_http(response, body_limit).await
}
