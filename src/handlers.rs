//! Built-in route handlers.
//!
//! The three endpoints this server ships:
//!
//! | Path | Body |
//! |---|---|
//! | `GET /` | `Hello World!` (plain text) |
//! | `GET /health` | `{"status":"healthy","uptime":<seconds>}` |
//! | `GET /load-test` | timing report for a synthetic CPU burn |
//!
//! Register them on your router:
//!
//! ```rust,no_run
//! use smolder::{Router, handlers};
//!
//! let app = Router::new()
//!     .get("/", handlers::greeting)
//!     .get("/health", handlers::health)
//!     .get("/load-test", handlers::load_test);
//! ```

use std::sync::LazyLock;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde::Serialize;

use crate::request::Request;
use crate::response::Response;

/// Iteration count used when the `iterations` query parameter is absent or
/// not an integer.
const DEFAULT_ITERATIONS: i64 = 1_000_000;

/// The process start instant, read by [`health`] to compute uptime.
///
/// Immutable once initialized, so uptime is a pure function of now minus
/// start. No locking.
static STARTED_AT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the process start instant. Call once at startup, before serving;
/// otherwise the first `/health` request pins it instead.
pub fn record_start() {
    LazyLock::force(&STARTED_AT);
}

/// `GET /` — fixed plain-text greeting.
pub async fn greeting(_req: Request) -> Response {
    Response::text("Hello World!")
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    uptime: f64,
}

/// `GET /health` — always healthy while the process can answer, with seconds
/// since process start.
pub async fn health(_req: Request) -> Response {
    json(&Health {
        status: "healthy",
        uptime: STARTED_AT.elapsed().as_secs_f64(),
    })
}

#[derive(Serialize)]
struct LoadTestReport {
    message: &'static str,
    iterations: i64,
    result: i64,
    duration: String,
    timestamp: String,
}

/// `GET /load-test` — burns CPU for `iterations` loop rounds and reports
/// wall-clock timing.
///
/// `iterations` defaults to 1,000,000 when absent or non-numeric; a malformed
/// value is never rejected. There is no upper bound and the loop runs
/// synchronously on the serving task without yielding, so a huge count ties
/// that task up until the loop finishes — the endpoint's documented contract
/// (see the crate-level warning).
pub async fn load_test(req: Request) -> Response {
    let iterations = req
        .query("iterations")
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    let start = Instant::now();
    let mut sum = 0.0_f64;
    for i in 0..iterations {
        sum += (i as f64).sqrt() * rand::random::<f64>();
    }
    let elapsed = start.elapsed();

    json(&LoadTestReport {
        message: "Load test completed",
        iterations,
        result: sum.floor() as i64,
        duration: format!("{}ms", elapsed.as_millis()),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

fn json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => Response::json(bytes),
        Err(_) => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
