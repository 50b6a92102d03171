//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::repository::CharacterRepository;
use crate::types::{Character, ListPage, PageInfo};

type Gate<T> = oneshot::Receiver<Result<T, TransportError>>;

/// In-memory repository.
///
/// Answers come from the `pages`/`characters` tables, unless a gate was
/// registered for that page or id: then the call parks until the test sends
/// the outcome, which lets a test decide the order in which overlapping
/// requests complete.
#[derive(Default)]
pub struct FakeRepository {
    pages: Mutex<HashMap<u32, ListPage>>,
    characters: Mutex<HashMap<u32, Character>>,
    page_gates: Mutex<HashMap<u32, Gate<ListPage>>>,
    character_gates: Mutex<HashMap<u32, Gate<Character>>>,
    character_calls: AtomicUsize,
}

impl FakeRepository {
    pub fn with_page(self, page: u32, list_page: ListPage) -> Self {
        self.pages.lock().unwrap().insert(page, list_page);
        self
    }

    pub fn with_character(self, character: Character) -> Self {
        self.characters.lock().unwrap().insert(character.id, character);
        self
    }

    pub fn gate_page(&self, page: u32) -> oneshot::Sender<Result<ListPage, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.page_gates.lock().unwrap().insert(page, rx);
        tx
    }

    pub fn gate_character(&self, id: u32) -> oneshot::Sender<Result<Character, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.character_gates.lock().unwrap().insert(id, rx);
        tx
    }

    pub fn character_calls(&self) -> usize {
        self.character_calls.load(Ordering::SeqCst)
    }
}

async fn pass<T>(gate: Gate<T>) -> Result<T, TransportError> {
    gate.await
        .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".to_string())))
}

#[async_trait]
impl CharacterRepository for FakeRepository {
    async fn get_characters(&self, page: u32) -> Result<ListPage, TransportError> {
        let gate = self.page_gates.lock().unwrap().remove(&page);
        if let Some(gate) = gate {
            return pass(gate).await;
        }
        let found = self.pages.lock().unwrap().get(&page).cloned();
        found.ok_or(TransportError::NotFound { message: None })
    }

    async fn get_character_by_id(&self, id: u32) -> Result<Character, TransportError> {
        self.character_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.character_gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            return pass(gate).await;
        }
        let found = self.characters.lock().unwrap().get(&id).cloned();
        found.ok_or(TransportError::NotFound { message: None })
    }
}

pub fn character(id: u32) -> Character {
    Character {
        id,
        name: format!("Character {id}"),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        image_url: format!("http://x/{id}.jpeg"),
    }
}

/// A page holding `ids`, claiming `total_pages` pages overall.
pub fn list_page(total_pages: u32, ids: &[u32]) -> ListPage {
    ListPage {
        info: PageInfo {
            count: total_pages * 20,
            total_pages,
            next_url: None,
            prev_url: None,
        },
        items: ids.iter().copied().map(character).collect(),
    }
}
