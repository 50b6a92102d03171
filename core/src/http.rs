//! HTTP exchange described as plain data.
//!
//! # Design
//! `CatalogClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. Whoever executes the exchange (the
//! `HttpTransport` in this crate, or a native host through the C ABI)
//! converts between these types and its own HTTP stack.
//!
//! The catalog API is read-only, so every request is a `GET` without a body.
//! All fields are owned so values can cross task and FFI boundaries freely.

/// A `GET` request against the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A response as seen by the executor of an `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Convenience constructor for responses whose headers are irrelevant.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
