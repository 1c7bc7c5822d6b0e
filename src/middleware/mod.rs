//! Middleware layer.
//!
//! Middleware intercepts requests before routing and is the right place for
//! cross-cutting concerns: access logging, request-id injection, and
//! authentication-header inspection.
//!
//! A layer sees every request — matched or not — and may short-circuit by
//! returning a response, in which case no handler runs. The one built-in,
//! [`AccessLog`], only observes and always passes through.

mod access_log;

pub use access_log::AccessLog;

use crate::request::Request;
use crate::response::Response;

/// A pre-routing request hook.
///
/// Attached with [`Router::layer`](crate::Router::layer). Returning
/// `Some(response)` short-circuits the request; returning `None` forwards it
/// unchanged to the next layer and then the matched handler.
pub trait Middleware: Send + Sync + 'static {
    fn call(&self, req: &Request) -> Option<Response>;
}
