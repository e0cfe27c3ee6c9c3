mod todo_items;
mod todo_lists;

use axum::http::{Method, Uri};
use axum::Router;

use super::error::ApiError;
use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(todo_lists::router())
        .merge(todo_items::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

/// Unknown paths and unsupported methods on known paths both answer 404.
async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
