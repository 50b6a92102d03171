//! Observable UI state produced by the controllers.
//!
//! # Design
//! Status values are closed enums so a renderer has to handle every case.
//! Errors arrive here as data (a message string), never as a `Result`.

use std::ops::RangeInclusive;

use crate::error::TransportError;
use crate::types::Character;

/// Message shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "Error desconocido";

/// Collapse a transport failure into the text shown to the user.
pub fn error_message(err: &TransportError) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text
    }
}

/// Progress of the most recent list request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Success(Vec<Character>),
    Error(String),
}

/// Everything the list screen renders.
///
/// `items`, `current_page` and `total_pages` only change on success, so a
/// failed refresh keeps showing the previous page next to the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub current_page: u32,
    pub total_pages: u32,
    pub items: Vec<Character>,
    pub status: ListStatus,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            items: Vec::new(),
            status: ListStatus::Idle,
        }
    }
}

impl ListState {
    /// Page numbers a page selector should offer.
    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListStatus::Loading)
    }
}

/// State of the detail slot. Replaced wholesale by every request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Success(Character),
    Error(String),
}
