//! `http::Response` → envelope translation.
//!
//! # Responsibilities
//! - Buffer the router's response body, bounded by config
//! - Flatten headers into the single-value map the gateway expects
//! - Build the fixed error envelopes used by the adapter
//!
//! # Design Decisions
//! - UTF-8 bodies pass through as text; anything else is base64
//! - Repeated headers are joined with ", "
//! - Header values that are not visible ASCII are dropped

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Response, StatusCode},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::gateway::types::{GatewayResponse, GatewayResult};
use crate::routing::recovery::ErrorBody;

pub const NOT_INITIALIZED: &str = "Lambda not initialized";
pub const PROCESSING_FAILED: &str = "Processing failed";

impl GatewayResponse {
    /// Fixed 500 envelope with a JSON `{"error": ...}` body.
    pub fn error(message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| String::from(r#"{"error":"Internal Server Error"}"#));

        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            headers: BTreeMap::from([(
                CONTENT_TYPE.as_str().to_string(),
                "application/json".to_string(),
            )]),
            body,
            is_base64_encoded: false,
        }
    }

    /// Collect a router response into an envelope.
    pub async fn from_http(response: Response<Body>, body_limit: usize) -> GatewayResult<Self> {
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, body_limit).await?;

        let (body, is_base64_encoded) = match std::str::from_utf8(&bytes) {
            Ok(text) => (text.to_string(), false),
            Err(_) => (STANDARD.encode(&bytes), true),
        };

        Ok(Self {
            status_code: parts.status.as_u16(),
            headers: flatten_headers(&parts.headers),
            body,
            is_base64_encoded,
        })
    }
}

/// Collapse a `HeaderMap` into one value per lowercase name.
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            let values: Vec<&str> = headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect();
            if values.is_empty() {
                None
            } else {
                Some((name.as_str().to_string(), values.join(", ")))
            }
        })
        .collect()
}
