//! Gateway envelope types and error definitions.
//!
//! Field names follow the API Gateway REST proxy integration format.
//! Unknown fields (`requestContext`, `multiValueHeaders`, ...) are ignored.

use std::collections::BTreeMap;

use axum::BoxError;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One inbound invocation as delivered by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_method: String,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: BTreeMap<String, String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    /// Create an event with a method and path and nothing else.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Path as seen by the router; a missing path is the root.
    pub fn path_or_root(&self) -> &str {
        match self.path.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "/",
        }
    }
}

/// The envelope returned to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Faults while translating or dispatching one invocation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The event's method is not a valid HTTP method token.
    #[error("invalid method: {0}")]
    InvalidMethod(#[from] axum::http::method::InvalidMethod),

    /// A header name or value cannot be represented in HTTP.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    /// Query parameters could not be encoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] serde_urlencoded::ser::Error),

    /// The request could not be assembled (bad URI and the like).
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] axum::http::Error),

    /// `isBase64Encoded` was set but the body is not base64.
    #[error("invalid base64 body: {0}")]
    InvalidBody(#[from] base64::DecodeError),

    /// The router service returned an error.
    #[error("dispatch failed: {0}")]
    Dispatch(BoxError),

    /// The response body could not be collected.
    #[error("response body: {0}")]
    Body(#[from] axum::Error),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
