use std::fmt;

use thiserror::Error;

/// Which store an error originated from. Its `Display` is the human name used
/// in not-found messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    TodoList,
    TodoItem,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::TodoList => write!(f, "Todo list"),
            Entity::TodoItem => write!(f, "Todo item"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i64 },

    /// The store already holds `i64::MAX`; no larger id can be assigned.
    #[error("{entity} ids exhausted")]
    IdsExhausted { entity: Entity },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = StoreError::NotFound {
            entity: Entity::TodoList,
            id: 999,
        };
        assert_eq!(err.to_string(), "Todo list with id 999 not found");

        let err = StoreError::NotFound {
            entity: Entity::TodoItem,
            id: -3,
        };
        assert_eq!(err.to_string(), "Todo item with id -3 not found");
    }
}
