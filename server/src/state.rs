use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::{TodoItemStore, TodoListStore};

/// Handles to the two stores, shared by every request.
///
/// Built once per router. Each store sits behind its own lock, so a single
/// store operation is atomic but nothing spans both stores.
#[derive(Clone, Default)]
pub struct AppState {
    pub lists: Arc<RwLock<TodoListStore>>,
    pub items: Arc<RwLock<TodoItemStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores(lists: TodoListStore, items: TodoItemStore) -> Self {
        Self {
            lists: Arc::new(RwLock::new(lists)),
            items: Arc::new(RwLock::new(items)),
        }
    }
}
