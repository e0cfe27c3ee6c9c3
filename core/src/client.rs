//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method
//! consuming the `HttpResponse`; the caller does the I/O in between.
//!
//! Item `get` and `toggle` answer a missing id with an empty 200, so their
//! parsers return `Option`. Every other miss surfaces as `ApiError::NotFound`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodoItem, ErrorEnvelope, TodoItem, TodoList, TodoListInput, UpdateTodoItem,
};

const LISTS: &str = "api/todolists";
const ITEMS: &str = "api/todoItem";

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    // --- todo lists ---

    pub fn build_list_todolists(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.url(LISTS))
    }

    pub fn build_get_todolist(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.url(&format!("{LISTS}/{id}")))
    }

    pub fn build_create_todolist(&self, input: &TodoListInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(HttpMethod::Post, self.url(LISTS), to_json(input)?))
    }

    pub fn build_update_todolist(
        &self,
        id: i64,
        input: &TodoListInput,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Put,
            self.url(&format!("{LISTS}/{id}")),
            to_json(input)?,
        ))
    }

    pub fn build_delete_todolist(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.url(&format!("{LISTS}/{id}")))
    }

    pub fn parse_list_todolists(&self, response: HttpResponse) -> Result<Vec<TodoList>, ApiError> {
        decode(&response, 200)
    }

    /// Parses the answer to a get or an update.
    pub fn parse_todolist(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        decode(&response, 200)
    }

    pub fn parse_create_todolist(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        decode(&response, 201)
    }

    // --- todo items ---

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.url(ITEMS))
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.url(&format!("{ITEMS}/{id}")))
    }

    pub fn build_create_item(&self, input: &CreateTodoItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(HttpMethod::Post, self.url(ITEMS), to_json(input)?))
    }

    pub fn build_update_item(
        &self,
        id: i64,
        input: &UpdateTodoItem,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Put,
            self.url(&format!("{ITEMS}/{id}")),
            to_json(input)?,
        ))
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.url(&format!("{ITEMS}/{id}")))
    }

    pub fn build_toggle_item(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Put, self.url(&format!("{ITEMS}/complete/{id}")))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        decode(&response, 200)
    }

    /// `None` when the server had no item under that id.
    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Option<TodoItem>, ApiError> {
        decode_optional(&response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        decode(&response, 201)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        decode(&response, 200)
    }

    pub fn parse_toggle_item(&self, response: HttpResponse) -> Result<Option<TodoItem>, ApiError> {
        decode_optional(&response)
    }

    // --- shared ---

    /// Parses the answer to a delete of either resource.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }
}

fn to_json<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn decode_optional<T: DeserializeOwned>(response: &HttpResponse) -> Result<Option<T>, ApiError> {
    check_status(response, 200)?;
    if response.has_empty_body() {
        return Ok(None);
    }
    decode(response, 200).map(Some)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let message = || {
        serde_json::from_str::<ErrorEnvelope>(&response.body)
            .map(|e| e.message_text())
            .unwrap_or_else(|_| response.body.clone())
    };
    match response.status {
        404 => Err(ApiError::NotFound(message())),
        400 => Err(ApiError::BadRequest(message())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
