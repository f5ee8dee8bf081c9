//! The local development listener serves the same routes over TCP.

use hello_lambda::lifecycle::{local, App};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_local_listener_serves_routes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = App::build().into_router().expect("router builds");

    let server = tokio::spawn(local::serve(router, listener));

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("listener reachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"status": "ok"}));

    let res = client
        .get(format!("http://{}/api/v1/hello?x=1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"message": "hello world", "path": "/api/v1/hello", "method": "GET"})
    );

    let res = client
        .get(format!("http://{}/nope", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    server.abort();
}

#[test]
fn test_local_mode_can_be_disabled() {
    let mut config = hello_lambda::config::LocalConfig::default();
    config.enabled = false;
    assert!(!local::should_serve_locally(&config));
}
