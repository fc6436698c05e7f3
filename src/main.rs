use std::sync::{Arc, Mutex};

use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;

mod client;
mod data;
mod html;
mod routes;
mod widget;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<data::CommentStore>>,
}

impl AppState {
    pub fn new(store: data::CommentStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/api/comments", any(routes::api::comments))
        .route("/asset/:file", get(routes::files::asset))
        .route("/script/:file", get(routes::files::script))
        .route("/style/:file", get(routes::files::style))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let store = data::CommentStore::new("content/comments.json");
    match store.list() {
        Ok(comments) => println!("Store loaded with {} comments", comments.len()),
        Err(err) => println!("Store unreadable: {err:?}"),
    }

    let app = app(AppState::new(store));

    let listener = listener().await;
    axum::serve(listener, app).await.unwrap();
}

#[cfg(debug_assertions)]
async fn listener() -> TcpListener {
    TcpListener::bind("0.0.0.0:3000").await.unwrap()
}

#[cfg(not(debug_assertions))]
async fn listener() -> TcpListener {
    TcpListener::bind("0.0.0.0:80").await.unwrap()
}
