//! Client core for a paginated character catalog.
//!
//! # Overview
//! Turns the catalog's list and by-id endpoints into observable UI state
//! with loading/success/error semantics. A native UI renders the state and
//! calls the controllers' load operations; it never mutates state itself.
//!
//! # Design
//! - `CatalogClient` builds requests and parses responses without I/O, so a
//!   host can also run the HTTP exchange itself (see the `catalog-ffi` crate).
//! - `CatalogApi` executes those requests through an `HttpTransport`
//!   (`reqwest` by default).
//! - `CharacterRepository` is the seam the controllers depend on; tests
//!   inject fakes there.
//! - `ListController` and `DetailController` each own one `watch` channel
//!   and apply results last-issued-wins.
//! - Errors never reach the UI as faults: controllers fold them into the
//!   `Error(message)` state variants.

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod list;
pub mod repository;
pub mod state;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::CatalogClient;
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use detail::DetailController;
pub use error::TransportError;
pub use http::{HttpRequest, HttpResponse};
pub use list::ListController;
pub use repository::{CatalogRepository, CharacterRepository};
pub use state::{error_message, DetailState, ListState, ListStatus, UNKNOWN_ERROR};
pub use transport::{CatalogApi, HttpTransport, ReqwestTransport};
pub use types::{Character, ListPage, PageInfo};
