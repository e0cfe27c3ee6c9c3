//! `/api/todoItem` routes.
//!
//! `show` and `toggle` answer a missing id with 200 and an empty body, while
//! `update` and `destroy` answer it with 404. Clients depend on this split.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{PathId, ValidJson};
use crate::models::{CreateTodoItem, TodoItem, UpdateTodoItem};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todoItem", get(index).post(create))
        .route(
            "/api/todoItem/{id}",
            get(show).put(update).delete(destroy),
        )
        .route("/api/todoItem/complete/{id}", put(toggle))
}

async fn index(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    Json(state.items.read().await.list())
}

async fn show(State(state): State<AppState>, PathId(id): PathId) -> Response {
    silent_miss(state.items.read().await.get(id))
}

async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTodoItem>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let item = state
        .items
        .write()
        .await
        .create(input.list_id, input.description)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<UpdateTodoItem>,
) -> Result<Json<TodoItem>, ApiError> {
    let item = state.items.write().await.update(id, input.description)?;
    Ok(Json(item))
}

async fn destroy(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    state.items.write().await.delete(id)?;
    Ok(StatusCode::OK)
}

async fn toggle(State(state): State<AppState>, PathId(id): PathId) -> Response {
    silent_miss(state.items.write().await.toggle_completed(id))
}

/// `Some` renders as JSON, `None` as an empty 200.
fn silent_miss(item: Option<TodoItem>) -> Response {
    match item {
        Some(item) => Json(item).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
