use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub url: String,
    pub created: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Info {
    pub count: usize,
    pub pages: usize,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: Info,
    pub results: Vec<Character>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

pub type Catalog = Arc<Vec<Character>>;

const NAMES: [&str; 6] = [
    "Rick Sanchez",
    "Morty Smith",
    "Summer Smith",
    "Beth Smith",
    "Jerry Smith",
    "Abadango Cluster Princess",
];

/// A deterministic catalog of `count` characters with ids `1..=count`.
pub fn seed(count: u32) -> Vec<Character> {
    (1..=count)
        .map(|id| {
            let name = NAMES[(id as usize - 1) % NAMES.len()];
            Character {
                id,
                name: format!("{name} #{id}"),
                status: if id % 3 == 0 { "Dead" } else { "Alive" }.to_string(),
                species: if id % 5 == 0 { "Alien" } else { "Human" }.to_string(),
                gender: if id % 2 == 0 { "Female" } else { "Male" }.to_string(),
                image: format!("/character/avatar/{id}.jpeg"),
                url: format!("/character/{id}"),
                created: "2017-11-04T18:48:46.250Z".to_string(),
            }
        })
        .collect()
}

/// Router over the default 826-character catalog (42 pages).
pub fn app() -> Router {
    app_with(seed(826))
}

pub fn app_with(characters: Vec<Character>) -> Router {
    let catalog: Catalog = Arc::new(characters);
    Router::new()
        .route("/character", get(list_characters))
        .route("/character/{id}", get(get_character))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
}

async fn list_characters(
    State(catalog): State<Catalog>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CharacterPage>, (StatusCode, Json<Value>)> {
    let page = query.page.unwrap_or(1).max(1);
    let count = catalog.len();
    let pages = count.div_ceil(PAGE_SIZE);
    debug!(page, pages, "list characters");

    if page > pages {
        return Err(not_found("There is nothing here"));
    }

    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(count);
    let link = |p: usize| format!("/character?page={p}");

    Ok(Json(CharacterPage {
        info: Info {
            count,
            pages,
            next: (page < pages).then(|| link(page + 1)),
            prev: (page > 1).then(|| link(page - 1)),
        },
        results: catalog[start..end].to_vec(),
    }))
}

async fn get_character(
    State(catalog): State<Catalog>,
    Path(id): Path<u32>,
) -> Result<Json<Character>, (StatusCode, Json<Value>)> {
    debug!(id, "get character");
    catalog
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Character not found"))
}
