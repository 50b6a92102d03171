//! Paginated list controller.
//!
//! # Design
//! The controller is the only writer of its `ListState`; the host reads it
//! through `watch` receivers. `load_characters` flips the status to
//! `Loading` before returning and runs the fetch as a tokio task.
//!
//! Overlapping loads are resolved last-issued-wins: every call takes a new
//! generation number and a completion only writes if its generation is
//! still the latest. The check happens inside `send_if_modified`, i.e.
//! under the watch lock, so it cannot interleave with a newer call's
//! `Loading` write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::repository::CharacterRepository;
use crate::state::{error_message, ListState, ListStatus};

pub struct ListController {
    repository: Arc<dyn CharacterRepository>,
    state: Arc<watch::Sender<ListState>>,
    generation: Arc<AtomicU64>,
}

impl ListController {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            repository,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create the controller and start loading the first page right away.
    /// Must be called from within a tokio runtime.
    pub fn with_initial_load(repository: Arc<dyn CharacterRepository>) -> Self {
        let controller = Self::new(repository);
        // The handle is not needed; progress is observable through the state.
        drop(controller.load_characters(1));
        controller
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Load `page`, superseding any load still in flight.
    ///
    /// The returned handle resolves once the outcome has been applied (or
    /// discarded as stale). Must be called from within a tokio runtime.
    pub fn load_characters(&self, page: u32) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.status = ListStatus::Loading);
        debug!(page, generation, "loading character page");

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);

        tokio::spawn(async move {
            let result = repository.get_characters(page).await;

            state.send_if_modified(|s| {
                if latest.load(Ordering::SeqCst) != generation {
                    debug!(page, generation, "discarding superseded page load");
                    return false;
                }
                match result {
                    Ok(list_page) => {
                        debug!(page, items = list_page.items.len(), "character page loaded");
                        s.current_page = page;
                        s.total_pages = list_page.info.total_pages.max(1);
                        s.items = list_page.items.clone();
                        s.status = ListStatus::Success(list_page.items);
                    }
                    Err(err) => {
                        warn!(page, error = %err, "character page failed");
                        s.status = ListStatus::Error(error_message(&err));
                    }
                }
                true
            });
        })
    }

    /// Load the current page again.
    pub fn reload(&self) -> JoinHandle<()> {
        let page = self.state.borrow().current_page;
        self.load_characters(page)
    }
}
