//! Incoming HTTP request type.

use std::collections::HashMap;
use std::net::SocketAddr;

use http::{HeaderMap, Method, Uri};

/// An incoming HTTP request, as seen by middleware and handlers.
///
/// Owns everything a handler needs — method, path, query parameters, headers,
/// the client's address, and any path parameters the router extracted. The
/// request body is intentionally absent: every route this server exposes is a
/// bodiless `GET`.
pub struct Request {
    method: Method,
    path: String,
    target: String,
    query: HashMap<String, String>,
    headers: HeaderMap,
    remote_addr: SocketAddr,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        uri: &Uri,
        headers: HeaderMap,
        remote_addr: SocketAddr,
    ) -> Self {
        let target = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned());

        Self {
            method,
            path: uri.path().to_owned(),
            target,
            query: parse_query(uri.query()),
            headers,
            remote_addr,
            params: HashMap::new(),
        }
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }

    pub fn method(&self) -> &Method { &self.method }

    /// The request path, without the query string.
    pub fn path(&self) -> &str { &self.path }

    /// The full request target as sent by the client, query string included.
    pub fn target(&self) -> &str { &self.target }

    pub fn remote_addr(&self) -> SocketAddr { self.remote_addr }

    /// Case-insensitive header lookup. Returns `None` for non-UTF-8 values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a query parameter by name.
    ///
    /// For `/load-test?iterations=500`, `req.query("iterations")` returns
    /// `Some("500")`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns
    /// `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Splits a raw query string into key/value pairs.
///
/// A key without `=` maps to the empty string. Later duplicates win. No
/// percent-decoding — the values this server reads are plain integers.
fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    let Some(raw) = raw else {
        return HashMap::new();
    };

    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_owned(), v.to_owned()),
            None => (pair.to_owned(), String::new()),
        })
        .collect()
}
