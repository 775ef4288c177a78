//! Error types for the region cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Configuration Error Enum ==
/// Errors raised while registering or resolving cache regions.
///
/// Region configuration is static, so every variant is a startup error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No region was registered under this name
    #[error("Cache region not configured: {0}")]
    UnknownRegion(String),

    /// A region with this name already exists
    #[error("Cache region already registered: {0}")]
    DuplicateRegion(String),

    /// Maximum entry count must be positive
    #[error("Cache region '{0}' must allow at least one entry")]
    InvalidCapacity(String),

    /// Region configuration could not be parsed
    #[error("Malformed cache configuration: {0}")]
    Malformed(String),
}

// == Cache Error Enum ==
/// Unified error type for the catalog API.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog API.
pub type Result<T> = std::result::Result<T, CacheError>;
