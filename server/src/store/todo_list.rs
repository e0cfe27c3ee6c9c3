use crate::models::TodoList;

use super::{Collection, Entity, Record, StoreError};

impl Record for TodoList {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Store for todo lists. Every by-id operation fails with `NotFound` on a miss.
#[derive(Debug, Default)]
pub struct TodoListStore {
    lists: Collection<TodoList>,
}

impl TodoListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(lists: Vec<TodoList>) -> Self {
        Self {
            lists: Collection::with_records(lists),
        }
    }

    pub fn list(&self) -> Vec<TodoList> {
        self.lists.all().to_vec()
    }

    pub fn get(&self, id: i64) -> Result<TodoList, StoreError> {
        self.lists.find(id).cloned().ok_or_else(|| not_found(id))
    }

    pub fn create(&mut self, name: String) -> Result<TodoList, StoreError> {
        let id = self.lists.next_id().ok_or(StoreError::IdsExhausted {
            entity: Entity::TodoList,
        })?;
        let list = TodoList { id, name };
        self.lists.push(list.clone());
        tracing::debug!(id, "created todo list");
        Ok(list)
    }

    pub fn update(&mut self, id: i64, name: String) -> Result<TodoList, StoreError> {
        let list = self.lists.find_mut(id).ok_or_else(|| not_found(id))?;
        list.name = name;
        tracing::debug!(id, "renamed todo list");
        Ok(list.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.lists.remove(id).ok_or_else(|| not_found(id))?;
        tracing::debug!(id, "deleted todo list");
        Ok(())
    }
}

fn not_found(id: i64) -> StoreError {
    StoreError::NotFound {
        entity: Entity::TodoList,
        id,
    }
}
