//! Access-log middleware.

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::middleware::Middleware;
use crate::request::Request;
use crate::response::Response;

/// Logs one line per request and forwards it untouched.
///
/// The line carries an ISO-8601 timestamp, the method, the request target
/// (query string included), and the client's address:
///
/// ```text
/// 2026-08-23T10:15:42.117Z GET /load-test?iterations=500 - 127.0.0.1:58012
/// ```
///
/// Emitted at `info` under the `access` target. This layer never rejects or
/// mutates a request, so it cannot fail.
pub struct AccessLog;

impl Middleware for AccessLog {
    fn call(&self, req: &Request) -> Option<Response> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        info!(
            target: "access",
            "{timestamp} {} {} - {}",
            req.method(),
            req.target(),
            req.remote_addr(),
        );
        None
    }
}
