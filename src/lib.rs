//! # smolder
//!
//! A minimal HTTP server with a synthetic CPU-burn load-test endpoint.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! smolder exists to exercise serving capacity, not to measure real work.
//! Three routes, zero shared mutable state:
//!
//! - `GET /` — fixed plain-text greeting
//! - `GET /health` — JSON status plus seconds since process start
//! - `GET /load-test` — burns CPU for a caller-chosen iteration count and
//!   reports wall-clock timing
//!
//! Every request passes through the access-log middleware, which emits one
//! line (`<timestamp> <METHOD> <PATH> - <client-address>`) and forwards the
//! request untouched.
//!
//! The plumbing underneath:
//!
//! - Radix-tree routing — O(path-length) lookup via [`matchit`]
//! - Async I/O — tokio accept loop, hyper for HTTP/1.1 and HTTP/2
//! - Graceful shutdown — SIGTERM / Ctrl-C, drains in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use smolder::{Router, Server, handlers, middleware::AccessLog};
//!
//! #[tokio::main]
//! async fn main() {
//!     handlers::record_start();
//!
//!     let app = Router::new()
//!         .get("/", handlers::greeting)
//!         .get("/health", handlers::health)
//!         .get("/load-test", handlers::load_test)
//!         .layer(AccessLog);
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```
//!
//! ## A warning about `/load-test`
//!
//! The `iterations` query parameter has no upper bound, and the loop runs
//! synchronously on the serving task without yielding. A caller asking for an
//! enormous count ties up that task until the loop finishes. This is the
//! endpoint's documented contract — it is a capacity-exercise tool, so it is
//! expected to be deployed only where callers are trusted.

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod handlers;
pub mod middleware;

pub use error::Error;
pub use handler::Handler;
pub use http::{Method, StatusCode};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
