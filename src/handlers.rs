use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::MemoStore;
use crate::error::{MemoError, Result};
use crate::humanize::humanize;
use crate::models::{Memo, DATED_MEMO_KIND};
use crate::server::AppState;
use crate::templates::{render_add_memo, render_index, render_not_found};

#[derive(Debug, Deserialize)]
pub struct MemoParams {
    pub text: Option<String>,
    pub dat: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Status {
    pub stat: &'static str,
}

/// Body of the mutation endpoints: `{"result": {"stat": "true"}}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub result: Status,
}

fn status(code: StatusCode, ok: bool) -> Response {
    let stat = if ok { "true" } else { "false" };
    (code, Json(StatusResponse { result: Status { stat } })).into_response()
}

/// Runs one store call on the blocking pool so SQLite I/O and the store mutex
/// never hold up a runtime worker.
async fn with_store<T, F>(state: &AppState, f: F) -> Result<T>
where
    F: FnOnce(&MemoStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| MemoError::StoreUnavailable(format!("store task join error: {}", e)))?
}

pub async fn index_handler(State(state): State<AppState>) -> Response {
    tracing::debug!("Main page entry");
    let memos = match with_store(&state, |store| store.list_memos(DATED_MEMO_KIND)).await {
        Ok(memos) => memos,
        Err(e) => {
            tracing::error!("Failed to list memos: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load memos").into_response();
        }
    };
    for memo in &memos {
        tracing::debug!("Memo: {:?}", memo);
    }

    let now = Local::now();
    Html(render_index(&memos, |date| humanize(date, &now))).into_response()
}

pub async fn add_memo_handler() -> Html<String> {
    Html(render_add_memo())
}

pub async fn save_memo_handler(
    State(state): State<AppState>,
    Query(params): Query<MemoParams>,
) -> Response {
    let (Some(text), Some(date)) = (params.text, params.dat) else {
        tracing::warn!("Save memo request without text or date");
        return status(StatusCode::BAD_REQUEST, false);
    };
    tracing::info!("Saving memo dated {}", date);

    let memo = Memo::dated(date, text);
    match with_store(&state, move |store| store.insert_memo(&memo)).await {
        Ok(()) => status(StatusCode::OK, true),
        Err(e @ (MemoError::InvalidInput(_) | MemoError::InvalidDate(_))) => {
            tracing::warn!("Rejected memo: {}", e);
            status(StatusCode::BAD_REQUEST, false)
        }
        Err(e) => {
            tracing::error!("Failed to save memo: {}", e);
            status(StatusCode::INTERNAL_SERVER_ERROR, false)
        }
    }
}

pub async fn del_memo_handler(
    State(state): State<AppState>,
    Query(params): Query<MemoParams>,
) -> Response {
    let text = params.text.unwrap_or_default();
    let date = params.dat.unwrap_or_default();

    let result = {
        let date = date.clone();
        with_store(&state, move |store| store.delete_memo(DATED_MEMO_KIND, &date, &text)).await
    };
    match result {
        Ok(count) => {
            tracing::debug!("Deleted {} memo(s) dated {}", count, date);
            status(StatusCode::OK, true)
        }
        Err(e) => {
            tracing::error!("Failed to delete memo: {}", e);
            status(StatusCode::INTERNAL_SERVER_ERROR, false)
        }
    }
}

pub async fn not_found_handler(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!("Page not found: {}", uri);
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&uri.to_string(), "/index")),
    )
}
