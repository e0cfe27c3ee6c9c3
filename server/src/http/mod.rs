//! HTTP surface: routing, input validation, and error rendering.

pub mod error;
pub mod extractors;
pub mod routes;

pub use error::ApiError;
