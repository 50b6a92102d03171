//! The seam between the state controllers and the catalog.
//!
//! Controllers depend on `dyn CharacterRepository`, never on a concrete
//! transport, so tests can hand them a fake.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::transport::{CatalogApi, HttpTransport};
use crate::types::{Character, ListPage};

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    async fn get_characters(&self, page: u32) -> Result<ListPage, TransportError>;

    async fn get_character_by_id(&self, id: u32) -> Result<Character, TransportError>;
}

/// Pass-through repository over the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogRepository<T> {
    api: CatalogApi<T>,
}

impl<T: HttpTransport> CatalogRepository<T> {
    pub fn new(api: CatalogApi<T>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<T: HttpTransport> CharacterRepository for CatalogRepository<T> {
    async fn get_characters(&self, page: u32) -> Result<ListPage, TransportError> {
        self.api.fetch_character_page(page).await
    }

    async fn get_character_by_id(&self, id: u32) -> Result<Character, TransportError> {
        self.api.fetch_character_by_id(id).await
    }
}
