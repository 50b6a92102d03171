//! Single-character detail controller.
//!
//! Same ownership and last-issued-wins rules as `ListController`, over a
//! state with no paging. Nothing is cached: every call goes to the
//! repository, even for the id that is already shown.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::repository::CharacterRepository;
use crate::state::{error_message, DetailState};

pub struct DetailController {
    repository: Arc<dyn CharacterRepository>,
    state: Arc<watch::Sender<DetailState>>,
    generation: Arc<AtomicU64>,
    // 0 until the first request.
    requested_id: AtomicU32,
}

impl DetailController {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        let (state, _) = watch::channel(DetailState::Idle);
        Self {
            repository,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            requested_id: AtomicU32::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Id of the most recent `load_character_by_id` call.
    pub fn requested_id(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.requested_id.load(Ordering::SeqCst))
    }

    /// Fetch `id` into the detail slot, superseding any lookup in flight.
    /// Must be called from within a tokio runtime.
    pub fn load_character_by_id(&self, id: u32) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested_id.store(id, Ordering::SeqCst);
        self.state.send_replace(DetailState::Loading);
        debug!(id, generation, "loading character");

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);

        tokio::spawn(async move {
            let result = repository.get_character_by_id(id).await;

            state.send_if_modified(|s| {
                if latest.load(Ordering::SeqCst) != generation {
                    debug!(id, generation, "discarding superseded character load");
                    return false;
                }
                *s = match result {
                    Ok(character) => DetailState::Success(character),
                    Err(err) => {
                        warn!(id, error = %err, "character load failed");
                        DetailState::Error(error_message(&err))
                    }
                };
                true
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::state::UNKNOWN_ERROR;
    use crate::test_support::{character, FakeRepository};

    #[tokio::test]
    async fn starts_idle() {
        let controller = DetailController::new(Arc::new(FakeRepository::default()));
        assert_eq!(controller.state(), DetailState::Idle);
        assert!(controller.requested_id().is_none());
    }

    #[tokio::test]
    async fn loading_then_success() {
        let repo = Arc::new(FakeRepository::default());
        let gate = repo.gate_character(1);
        let controller = DetailController::new(repo);
        let mut rx = controller.subscribe();

        let handle = controller.load_character_by_id(1);
        assert_eq!(*rx.borrow_and_update(), DetailState::Loading);
        assert_eq!(controller.requested_id().map(NonZeroU32::get), Some(1));

        gate.send(Ok(character(1))).unwrap();
        handle.await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), DetailState::Success(character(1)));
    }

    #[tokio::test]
    async fn unknown_id_without_message_uses_fallback() {
        let controller = DetailController::new(Arc::new(FakeRepository::default()));
        controller.load_character_by_id(99999).await.unwrap();
        assert_eq!(
            controller.state(),
            DetailState::Error(UNKNOWN_ERROR.to_string())
        );
    }

    #[tokio::test]
    async fn unknown_id_keeps_transport_message() {
        let repo = Arc::new(FakeRepository::default());
        let gate = repo.gate_character(99999);
        let controller = DetailController::new(repo);
        let handle = controller.load_character_by_id(99999);
        gate.send(Err(TransportError::NotFound {
            message: Some("Character not found".to_string()),
        }))
        .unwrap();
        handle.await.unwrap();
        assert_eq!(
            controller.state(),
            DetailState::Error("Character not found".to_string())
        );
    }

    #[tokio::test]
    async fn every_load_hits_the_repository() {
        let repo = Arc::new(FakeRepository::default().with_character(character(5)));
        let controller = DetailController::new(repo.clone());
        controller.load_character_by_id(5).await.unwrap();
        controller.load_character_by_id(5).await.unwrap();
        assert_eq!(repo.character_calls(), 2);
        assert_eq!(controller.state(), DetailState::Success(character(5)));
    }

    #[tokio::test]
    async fn newer_id_wins_over_slower_older_lookup() {
        let repo = Arc::new(FakeRepository::default());
        let gate1 = repo.gate_character(1);
        let gate2 = repo.gate_character(2);
        let controller = DetailController::new(repo);

        let first = controller.load_character_by_id(1);
        let second = controller.load_character_by_id(2);

        gate2.send(Ok(character(2))).unwrap();
        second.await.unwrap();
        gate1.send(Ok(character(1))).unwrap();
        first.await.unwrap();

        assert_eq!(controller.state(), DetailState::Success(character(2)));
        assert_eq!(controller.requested_id().map(NonZeroU32::get), Some(2));
    }

    #[tokio::test]
    async fn success_replaces_previous_error() {
        let repo = Arc::new(FakeRepository::default().with_character(character(3)));
        let controller = DetailController::new(repo);
        controller.load_character_by_id(4).await.unwrap();
        assert!(matches!(controller.state(), DetailState::Error(_)));
        controller.load_character_by_id(3).await.unwrap();
        assert_eq!(controller.state(), DetailState::Success(character(3)));
    }
}
