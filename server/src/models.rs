//! Records owned by the stores and the request bodies that create or change them.
//!
//! Request DTOs reject unknown fields, so a body carrying anything beyond the
//! enumerated fields never reaches a store.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub description: String,
    pub is_completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoList {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoList {
    pub name: String,
}

/// `listId` is a free-form reference; no list has to exist under that id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTodoItem {
    pub list_id: i64,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoItem {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_serializes_camel_case() {
        let item = TodoItem {
            id: 7,
            list_id: 2,
            description: "Test".to_string(),
            is_completed: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["listId"], 2);
        assert_eq!(json["description"], "Test");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("list_id").is_none());
    }

    #[test]
    fn todo_list_serializes_id_and_name() {
        let list = TodoList {
            id: 1,
            name: "Groceries".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!({"id": 1, "name": "Groceries"})
        );
    }

    #[test]
    fn create_todo_item_requires_both_fields() {
        let result: Result<CreateTodoItem, _> = serde_json::from_str(r#"{"listId":1}"#);
        assert!(result.is_err());
        let result: Result<CreateTodoItem, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_item_rejects_completion_flag() {
        let result: Result<CreateTodoItem, _> =
            serde_json::from_str(r#"{"listId":1,"description":"x","isCompleted":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_item_rejects_non_integer_list_id() {
        let result: Result<CreateTodoItem, _> =
            serde_json::from_str(r#"{"listId":"notanumber","description":"x"}"#);
        assert!(result.is_err());
        let result: Result<CreateTodoItem, _> =
            serde_json::from_str(r#"{"listId":1.5,"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_item_rejects_numeric_description() {
        let result: Result<UpdateTodoItem, _> = serde_json::from_str(r#"{"description":123}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_list_rejects_unknown_fields() {
        let input: CreateTodoList = serde_json::from_str(r#"{"name":"ok"}"#).unwrap();
        assert_eq!(input.name, "ok");
        let result: Result<CreateTodoList, _> =
            serde_json::from_str(r#"{"name":"ok","owner":"me"}"#);
        assert!(result.is_err());
    }
}
