//! Error types for the catalog transport.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a bad id or an out-of-range
//! page is an expected outcome, not a server fault. The catalog answers 404s
//! with `{"error": "..."}`; that text is kept when present so the UI can show
//! it. All other non-2xx responses land in `HttpStatus` with the raw status
//! and body.
//!
//! `Display` of each variant is the human-readable description that ends up
//! in `ListStatus::Error` / `DetailState::Error`. A variant that renders to
//! an empty string means "no description available".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout, TLS).
    #[error("{0}")]
    Network(String),

    /// The server returned 404 for the requested page or id.
    #[error("{}", .message.as_deref().unwrap_or_default())]
    NotFound { message: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A page or id outside the range the API accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}
