//! `/api/todolists` routes. Every by-id miss is a 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{PathId, ValidJson};
use crate::models::{CreateTodoList, TodoList, UpdateTodoList};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/todolists", get(index).post(create))
        .route(
            "/api/todolists/{id}",
            get(show).put(update).delete(destroy),
        )
}

async fn index(State(state): State<AppState>) -> Json<Vec<TodoList>> {
    Json(state.lists.read().await.list())
}

async fn show(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<TodoList>, ApiError> {
    let list = state.lists.read().await.get(id)?;
    Ok(Json(list))
}

async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTodoList>,
) -> Result<(StatusCode, Json<TodoList>), ApiError> {
    let list = state.lists.write().await.create(input.name)?;
    Ok((StatusCode::CREATED, Json(list)))
}

async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidJson(input): ValidJson<UpdateTodoList>,
) -> Result<Json<TodoList>, ApiError> {
    let list = state.lists.write().await.update(id, input.name)?;
    Ok(Json(list))
}

async fn destroy(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    state.lists.write().await.delete(id)?;
    Ok(StatusCode::OK)
}
