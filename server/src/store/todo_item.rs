use crate::models::TodoItem;

use super::{Collection, Entity, Record, StoreError};

impl Record for TodoItem {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Store for todo items.
///
/// Unlike [`TodoListStore`](super::TodoListStore), `get` and
/// `toggle_completed` report a missing id as `None` rather than an error;
/// only `update` and `delete` fail with `NotFound`. HTTP clients rely on the
/// empty 200 response this produces.
#[derive(Debug, Default)]
pub struct TodoItemStore {
    items: Collection<TodoItem>,
}

impl TodoItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items: Collection::with_records(items),
        }
    }

    pub fn list(&self) -> Vec<TodoItem> {
        self.items.all().to_vec()
    }

    pub fn get(&self, id: i64) -> Option<TodoItem> {
        self.items.find(id).cloned()
    }

    /// Items always start incomplete.
    pub fn create(&mut self, list_id: i64, description: String) -> Result<TodoItem, StoreError> {
        let id = self.items.next_id().ok_or(StoreError::IdsExhausted {
            entity: Entity::TodoItem,
        })?;
        let item = TodoItem {
            id,
            list_id,
            description,
            is_completed: false,
        };
        self.items.push(item.clone());
        tracing::debug!(id, list_id, "created todo item");
        Ok(item)
    }

    pub fn update(&mut self, id: i64, description: String) -> Result<TodoItem, StoreError> {
        let item = self.items.find_mut(id).ok_or_else(|| not_found(id))?;
        item.description = description;
        tracing::debug!(id, "updated todo item description");
        Ok(item.clone())
    }

    pub fn toggle_completed(&mut self, id: i64) -> Option<TodoItem> {
        let item = self.items.find_mut(id)?;
        item.is_completed = !item.is_completed;
        tracing::debug!(id, is_completed = item.is_completed, "toggled todo item");
        Some(item.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.items.remove(id).ok_or_else(|| not_found(id))?;
        tracing::debug!(id, "deleted todo item");
        Ok(())
    }
}

fn not_found(id: i64) -> StoreError {
    StoreError::NotFound {
        entity: Entity::TodoItem,
        id,
    }
}
