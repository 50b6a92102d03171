//! Executing catalog requests over the network.
//!
//! `HttpTransport` is the single place where I/O happens. `CatalogApi`
//! wires it between `CatalogClient::build_*` and `CatalogClient::parse_*`.

use async_trait::async_trait;
use tracing::debug;

use crate::client::CatalogClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Character, ListPage};

/// Runs one HTTP exchange. Non-2xx responses are returned as data; only a
/// failure to obtain a response is an error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `HttpTransport` backed by a shared `reqwest::Client` with platform
/// default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.http.get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;

        debug!(url = %request.url, status, "catalog response");
        Ok(HttpResponse { status, headers, body })
    }
}

/// The catalog's two read operations, performed end to end.
#[derive(Debug, Clone)]
pub struct CatalogApi<T> {
    client: CatalogClient,
    transport: T,
}

impl<T: HttpTransport> CatalogApi<T> {
    pub fn new(client: CatalogClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Fetch one page of the catalog. `page` starts at 1.
    pub async fn fetch_character_page(&self, page: u32) -> Result<ListPage, TransportError> {
        let request = self.client.build_list_characters(page)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_list_characters(response)
    }

    /// Fetch a single character. `id` starts at 1.
    pub async fn fetch_character_by_id(&self, id: u32) -> Result<Character, TransportError> {
        let request = self.client.build_get_character(id)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_get_character(response)
    }
}
