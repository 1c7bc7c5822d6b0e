//! smolder binary — binds `0.0.0.0:$PORT` (default 3000) and serves the
//! three built-in routes.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/health
//!   curl 'http://localhost:3000/load-test?iterations=500000'

use smolder::{Router, Server, handlers, middleware::AccessLog};

#[tokio::main]
async fn main() {
    // The access line carries its own timestamp; the fmt layer must not wrap
    // it in a second prefix, or stdout no longer shows
    // `<ISO-timestamp> <METHOD> <PATH> - <client-address>`.
    tracing_subscriber::fmt()
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .init();
    handlers::record_start();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(3000);

    let app = Router::new()
        .get("/", handlers::greeting)
        .get("/health", handlers::health)
        .get("/load-test", handlers::load_test)
        .layer(AccessLog);

    Server::bind(&format!("0.0.0.0:{port}"))
        .serve(app)
        .await
        .expect("server error");
}
