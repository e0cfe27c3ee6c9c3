//! Wire types for the todo lists / todo items API.
//!
//! Defined independently of the server crate so the client does not pull in
//! Axum. The live integration test catches schema drift between the two.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub description: String,
    pub is_completed: bool,
}

/// Body for both creating and renaming a todo list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoListInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoItem {
    pub list_id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoItem {
    pub description: String,
}

/// Error body the server sends with every 4xx/5xx.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: serde_json::Value,
    pub error: String,
}

impl ErrorEnvelope {
    /// Message flattened to one line; array messages are joined with "; ".
    pub fn message_text(&self) -> String {
        match &self.message {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(parts) => parts
                .iter()
                .map(|p| p.as_str().map(str::to_string).unwrap_or_else(|| p.to_string()))
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}
