//! hello-lambda
//!
//! A minimal HTTP function behind API Gateway, built on Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────┐
//!                       │                  hello-lambda                     │
//!                       │                                                   │
//!   API Gateway event   │  ┌───────────┐    ┌──────────┐    ┌───────────┐  │
//!   ────────────────────┼─▶│  gateway  │───▶│ gateway  │───▶│  routing  │  │
//!                       │  │  adapter  │    │ request  │    │  (axum)   │  │
//!                       │  └───────────┘    └──────────┘    └─────┬─────┘  │
//!                       │                                         │        │
//!   Gateway response    │  ┌───────────┐    ┌──────────┐          ▼        │
//!   ◀───────────────────┼──│  gateway  │◀───│ gateway  │◀── health / hello │
//!                       │  │  adapter  │    │ response │                   │
//!                       │  └───────────┘    └──────────┘                   │
//!                       │                                                   │
//!                       │  config · observability · lifecycle (cold start) │
//!                       └──────────────────────────────────────────────────┘
//! ```
//!
//! Outside of Lambda (no `AWS_LAMBDA_RUNTIME_API`), the same router is
//! served over TCP for local development.

use hello_lambda::config::{self, ServiceConfig};
use hello_lambda::gateway::{GatewayEvent, InvocationHandler};
use hello_lambda::lifecycle::{local, App};
use hello_lambda::observability::logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Config comes first so logging can honor it; a bad config is reported
    // once logging is up.
    let (config, config_error) = match config::load_from_env() {
        Ok(config) => (config, None),
        Err(e) => (ServiceConfig::default(), Some(e)),
    };

    logging::init(&config.logging)?;

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
    }

    tracing::info!(
        log_format = ?config.logging.format,
        max_response_body_bytes = config.gateway.max_response_body_bytes,
        "=== Starting Lambda Function ==="
    );

    let app = App::build();

    if local::should_serve_locally(&config.local) {
        let Some(router) = app.into_router() else {
            return Err("router failed to initialize".into());
        };
        local::run(router, &config.local).await?;
        return Ok(());
    }

    let handler = InvocationHandler::new(app, &config.gateway);
    tracing::info!(
        initialized = handler.is_initialized(),
        "Entering invocation loop"
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<GatewayEvent>| {
        let handler = handler.clone();
        async move { handler.call(event).await }
    }))
    .await
}
