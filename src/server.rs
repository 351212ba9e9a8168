use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::MemoStore;
use crate::error::Result;
use crate::handlers::{
    add_memo_handler, del_memo_handler, index_handler, not_found_handler, save_memo_handler,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoStore>,
}

impl AppState {
    pub fn new(store: MemoStore) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index", get(index_handler))
        .route("/add_memo", get(add_memo_handler))
        .route("/_save_memo", get(save_memo_handler))
        .route("/_del_memo", get(del_memo_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Server shutting down signal received");
        })
        .await?;

    Ok(())
}
