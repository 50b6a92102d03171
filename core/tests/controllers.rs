//! Controllers wired to the real transport and the mock server.

use std::sync::Arc;

use catalog_core::{
    CatalogConfig, DetailController, DetailState, ListController, ListStatus,
};

async fn start_mock_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn list_pages_through_the_catalog() {
    let base = start_mock_server().await;
    let repository = Arc::new(CatalogConfig::new(base).repository());
    let controller = ListController::new(repository);

    controller.load_characters(1).await.unwrap();
    let state = controller.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 42);
    assert_eq!(state.items.len(), 20);
    assert!(matches!(state.status, ListStatus::Success(ref items) if *items == state.items));

    controller.load_characters(3).await.unwrap();
    let state = controller.state();
    assert_eq!(state.current_page, 3);
    assert_eq!(state.items.first().map(|c| c.id), Some(41));
}

#[tokio::test]
async fn out_of_range_page_keeps_previous_page_visible() {
    let base = start_mock_server().await;
    let controller = ListController::new(Arc::new(CatalogConfig::new(base).repository()));

    controller.load_characters(2).await.unwrap();
    controller.load_characters(100).await.unwrap();

    let state = controller.state();
    assert_eq!(state.status, ListStatus::Error("There is nothing here".to_string()));
    assert_eq!(state.current_page, 2);
    assert_eq!(state.items.first().map(|c| c.id), Some(21));
}

#[tokio::test]
async fn detail_success_and_not_found() {
    let base = start_mock_server().await;
    let controller = DetailController::new(Arc::new(CatalogConfig::new(base).repository()));

    controller.load_character_by_id(1).await.unwrap();
    match controller.state() {
        DetailState::Success(character) => {
            assert_eq!(character.id, 1);
            assert_eq!(character.name, "Rick Sanchez #1");
        }
        other => panic!("expected success, got {other:?}"),
    }

    controller.load_character_by_id(99999).await.unwrap();
    assert_eq!(
        controller.state(),
        DetailState::Error("Character not found".to_string())
    );
}

#[tokio::test]
async fn unreachable_catalog_surfaces_as_error_state() {
    // Bind and drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let controller =
        DetailController::new(Arc::new(CatalogConfig::new(format!("http://{addr}")).repository()));

    controller.load_character_by_id(1).await.unwrap();
    assert!(matches!(controller.state(), DetailState::Error(ref m) if !m.is_empty()));
}
