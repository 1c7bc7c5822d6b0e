//! Integration tests for smolder.
//!
//! These tests spin up the real server on ephemeral ports and speak raw
//! HTTP/1.1 over a TCP stream to verify end-to-end request flow.

use serde_json::Value;
use smolder::{Router, Server, handlers, middleware::AccessLog};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Spawn the full server — all three routes plus the access log — on an
/// ephemeral port. The listener is bound before the task is spawned, so the
/// returned port accepts connections immediately and cannot be stolen by a
/// parallel test.
async fn spawn_server() -> u16 {
    handlers::record_start();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = Router::new()
            .get("/", handlers::greeting)
            .get("/health", handlers::health)
            .get("/load-test", handlers::load_test)
            .layer(AccessLog);

        Server::serve_on(listener, app).await.unwrap();
    });

    port
}

/// Issue one request and return (status, body).
async fn request(port: u16, method: &str, target: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    let raw = format!("{method} {target} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n");
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    let text = String::from_utf8(buf).unwrap();

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("malformed status line");
    let body = text.split_once("\r\n\r\n").map_or(String::new(), |(_, b)| b.to_owned());
    (status, body)
}

async fn get(port: u16, target: &str) -> (u16, String) {
    request(port, "GET", target).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_the_greeting() {
    let port = spawn_server().await;
    let (status, body) = get(port, "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello World!");
}

#[tokio::test]
async fn root_is_idempotent() {
    let port = spawn_server().await;
    let first = get(port, "/").await;
    let second = get(port, "/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_reports_healthy_and_uptime_never_decreases() {
    let port = spawn_server().await;

    let (status, body) = get(port, "/health").await;
    assert_eq!(status, 200);
    let first: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(first["status"], "healthy");
    let first_uptime = first["uptime"].as_f64().unwrap();
    assert!(first_uptime >= 0.0);

    let (_, body) = get(port, "/health").await;
    let second: Value = serde_json::from_str(&body).unwrap();
    assert!(second["uptime"].as_f64().unwrap() >= first_uptime);
}

#[tokio::test]
async fn load_test_with_zero_iterations() {
    let port = spawn_server().await;

    let (status, body) = get(port, "/load-test?iterations=0").await;
    assert_eq!(status, 200);

    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["message"], "Load test completed");
    assert_eq!(report["iterations"], 0);
    assert_eq!(report["result"], 0);

    let duration = report["duration"].as_str().unwrap();
    let millis: u64 = duration.strip_suffix("ms").unwrap().parse().unwrap();
    // sanity: an empty loop does not take seconds
    assert!(millis < 1_000);
}

#[tokio::test]
async fn load_test_defaults_to_a_million_iterations() {
    let port = spawn_server().await;
    let (_, body) = get(port, "/load-test").await;
    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["iterations"], 1_000_000);
    assert!(report["result"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn load_test_coerces_garbage_to_the_default() {
    let port = spawn_server().await;
    let (status, body) = get(port, "/load-test?iterations=abc").await;
    assert_eq!(status, 200);
    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["iterations"], 1_000_000);
}

#[tokio::test]
async fn load_test_timestamp_is_rfc3339() {
    let port = spawn_server().await;
    let (_, body) = get(port, "/load-test?iterations=1").await;
    let report: Value = serde_json::from_str(&body).unwrap();
    let timestamp = report["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let port = spawn_server().await;
    let (status, body) = get(port, "/nope").await;
    assert_eq!(status, 404);
    assert!(body.is_empty());
}

#[tokio::test]
async fn wrong_method_on_a_known_path_is_404() {
    let port = spawn_server().await;
    let (status, _) = request(port, "POST", "/health").await;
    assert_eq!(status, 404);
}
