//! In-memory todo lists and todo items served over HTTP/JSON.
//!
//! # Overview
//! Two stores (`TodoListStore`, `TodoItemStore`) own their records for the
//! lifetime of the process. The HTTP layer validates path ids and bodies,
//! calls the store, and renders store errors as a uniform JSON envelope.
//!
//! # Design
//! - Stores return `Result`/`Option` and know nothing about HTTP.
//! - Stores are injected through [`AppState`]; [`app`] builds a fresh pair, so
//!   every router (and every test) starts empty.
//! - Handler panics are caught and answered with a 500 envelope.

pub mod config;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use models::{
    CreateTodoItem, CreateTodoList, TodoItem, TodoList, UpdateTodoItem, UpdateTodoList,
};
pub use state::AppState;
pub use store::{StoreError, TodoItemStore, TodoListStore};

/// Router backed by empty stores.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

pub fn app_with_state(state: AppState) -> Router {
    with_middleware(http::routes::api_router()).with_state(state)
}

/// Request tracing plus the panic boundary that answers with a 500 envelope.
pub fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(http::error::handle_panic))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Bind to the configured address and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
