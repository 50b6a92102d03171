//! Domain DTOs for the character catalog.
//!
//! # Design
//! Field names follow Rust conventions; `serde` renames map them onto the
//! catalog's JSON keys. Unknown keys are ignored (serde's default) so new
//! server fields never break decoding. The mock-server crate defines its own
//! copies of these shapes; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// Paging metadata returned alongside every list page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub count: u32,
    #[serde(rename = "pages")]
    pub total_pages: u32,
    #[serde(rename = "next", default)]
    pub next_url: Option<String>,
    #[serde(rename = "prev", default)]
    pub prev_url: Option<String>,
}

/// One page of the catalog, decoded atomically from a single response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListPage {
    pub info: PageInfo,
    #[serde(rename = "results")]
    pub items: Vec<Character>,
}
