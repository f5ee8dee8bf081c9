//! Event → `http::Request` translation.
//!
//! # Responsibilities
//! - Rebuild the request URI from path and query parameters
//! - Percent-encode path bytes a URI cannot carry (the gateway hands over
//!   decoded paths), so odd paths still reach the router and 404
//! - Normalize the method to upper case
//! - Copy headers, rejecting ones HTTP cannot carry
//! - Decode base64 bodies flagged by the gateway

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::gateway::types::{GatewayError, GatewayEvent, GatewayResult};

/// Bytes escaped in the path. `/` and `%` pass through untouched.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build the request the router will see.
pub fn into_http_request(event: GatewayEvent) -> GatewayResult<Request<Body>> {
    let method = Method::from_bytes(event.http_method.to_ascii_uppercase().as_bytes())?;
    let uri = request_uri(&event)?;

    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(headers) = builder.headers_mut() {
        for (name, value) in &event.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| GatewayError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| GatewayError::InvalidHeader(name.to_string()))?;
            headers.append(name, value);
        }
    }

    let body = match event.body {
        None => Body::empty(),
        Some(body) if event.is_base64_encoded => Body::from(STANDARD.decode(body.as_bytes())?),
        Some(body) => Body::from(body),
    };

    Ok(builder.body(body)?)
}

/// Encoded path plus the urlencoded query, keys in sorted order.
pub fn request_uri(event: &GatewayEvent) -> GatewayResult<String> {
    let path = event.path_or_root();
    let mut uri = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        uri.push('/');
    }
    uri.extend(utf8_percent_encode(path, PATH));
    if !event.query_string_parameters.is_empty() {
        uri.push('?');
        uri.push_str(&serde_urlencoded::to_string(&event.query_string_parameters)?);
    }
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_bytes(request: Request<Body>) -> Vec<u8> {
        axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_method_path_and_headers() {
        let event = GatewayEvent::new("GET", "/health").with_header("X-Trace", "abc");
        let request = into_http_request(event).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.uri().path(), "/health");
        assert_eq!(request.headers()["x-trace"], "abc");
    }

    #[test]
    fn test_query_is_encoded_and_sorted() {
        let event = GatewayEvent::new("GET", "/api/v1/hello")
            .with_query("z", "last")
            .with_query("a", "hello world");

        let uri = request_uri(&event).unwrap();
        assert_eq!(uri, "/api/v1/hello?a=hello+world&z=last");
    }

    #[test]
    fn test_path_is_percent_encoded() {
        let cases = [
            ("/api/v1/hello", "/api/v1/hello"),
            ("/no pe", "/no%20pe"),
            ("/a\"b{c}|d<e>", "/a%22b%7Bc%7D%7Cd%3Ce%3E"),
            ("/caf\u{e9}", "/caf%C3%A9"),
            ("/what?#", "/what%3F%23"),
            ("/already%20encoded", "/already%20encoded"),
            ("relative", "/relative"),
        ];

        for (path, expected) in cases {
            let event = GatewayEvent::new("GET", path);
            assert_eq!(request_uri(&event).unwrap(), expected, "path {:?}", path);

            let request = into_http_request(event).unwrap();
            assert_eq!(request.uri().path(), expected);
        }
    }

    #[test]
    fn test_method_is_upper_cased() {
        let request = into_http_request(GatewayEvent::new("get", "/health")).unwrap();
        assert_eq!(request.method(), Method::GET);

        let request = into_http_request(GatewayEvent::new("Post", "/")).unwrap();
        assert_eq!(request.method(), Method::POST);
    }

    #[test]
    fn test_missing_path_is_root() {
        let event = GatewayEvent {
            http_method: "GET".into(),
            ..Default::default()
        };
        assert_eq!(request_uri(&event).unwrap(), "/");
    }

    #[tokio::test]
    async fn test_plain_body() {
        let event = GatewayEvent::new("POST", "/").with_body("plain");
        let request = into_http_request(event).unwrap();
        assert_eq!(body_bytes(request).await, b"plain");
    }

    #[tokio::test]
    async fn test_base64_body_is_decoded() {
        let mut event = GatewayEvent::new("POST", "/").with_body("aGVsbG8=");
        event.is_base64_encoded = true;

        let request = into_http_request(event).unwrap();
        assert_eq!(body_bytes(request).await, b"hello");
    }

    #[test]
    fn test_invalid_inputs() {
        let bad_method = GatewayEvent::new("GE T", "/");
        assert!(matches!(
            into_http_request(bad_method),
            Err(GatewayError::InvalidMethod(_))
        ));

        let bad_header = GatewayEvent::new("GET", "/").with_header("bad header", "v");
        assert!(matches!(
            into_http_request(bad_header),
            Err(GatewayError::InvalidHeader(_))
        ));

        let mut bad_body = GatewayEvent::new("POST", "/").with_body("%%%");
        bad_body.is_base64_encoded = true;
        assert!(matches!(
            into_http_request(bad_body),
            Err(GatewayError::InvalidBody(_))
        ));
    }
}
