//! Where the catalog lives and how the default repository is assembled.

use crate::client::CatalogClient;
use crate::repository::CatalogRepository;
use crate::transport::{CatalogApi, ReqwestTransport};

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(&self.base_url)
    }

    /// Repository over HTTP with a fresh `reqwest` client.
    pub fn repository(&self) -> CatalogRepository<ReqwestTransport> {
        CatalogRepository::new(CatalogApi::new(self.client(), ReqwestTransport::default()))
    }
}
