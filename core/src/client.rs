//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip is somebody else's job, which
//! keeps this module deterministic and lets a native host reuse it through
//! the C ABI.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Character, ListPage};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `GET {base}/character?page={page}`. Pages start at 1.
    pub fn build_list_characters(&self, page: u32) -> Result<HttpRequest, TransportError> {
        if page == 0 {
            return Err(TransportError::InvalidArgument("page must be >= 1".to_string()));
        }
        Ok(get(format!("{}/character?page={page}", self.base_url)))
    }

    /// Build `GET {base}/character/{id}`. Ids start at 1.
    pub fn build_get_character(&self, id: u32) -> Result<HttpRequest, TransportError> {
        if id == 0 {
            return Err(TransportError::InvalidArgument("id must be >= 1".to_string()));
        }
        Ok(get(format!("{}/character/{id}", self.base_url)))
    }

    pub fn parse_list_characters(&self, response: HttpResponse) -> Result<ListPage, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_character(&self, response: HttpResponse) -> Result<Character, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Error payload the catalog sends with 404s.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map non-success status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        return Err(TransportError::NotFound { message });
    }
    Err(TransportError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
