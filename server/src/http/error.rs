//! HTTP error type and the JSON envelope every failure is rendered as.
//!
//! Envelope: `{"statusCode": <u16>, "message": <string | [string]>, "error": <reason>}`
//! where `error` is the canonical reason phrase of the status.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::store::StoreError;

pub const INVALID_ID_MESSAGE: &str = "Validation failed (numeric string is expected)";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed schema validation (400). One message per problem.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Path id is not an integer (400).
    #[error("Validation failed (numeric string is expected)")]
    InvalidId,

    /// A store reported a missing record (404).
    #[error("{0}")]
    NotFound(String),

    /// No route matches the request (404).
    #[error("Cannot {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// Anything unexpected (500). The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Value {
        match self {
            Self::Validation(messages) => json!(messages),
            Self::Internal(_) => json!("Internal server error"),
            other => json!(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }
        let body = json!({
            "statusCode": status.as_u16(),
            "message": self.message(),
            "error": status.canonical_reason().unwrap_or("Unknown"),
        });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => {
                tracing::debug!("{}", e);
                Self::NotFound(e.to_string())
            }
            StoreError::IdsExhausted { .. } => Self::Internal(e.to_string()),
        }
    }
}

/// Turns a handler panic into the 500 envelope so the connection gets a
/// well-formed answer and the server keeps running.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
