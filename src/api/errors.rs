//! # API Errors
//!
//! The client-facing error taxonomy and the single lookup from store
//! failures to it.
//!
//! - `BadRequest` (400): malformed or semantically invalid input
//! - `NotFound` (404): a valid identifier or path with no resource behind it
//! - `Fault` (500): anything unexpected; detail is logged, never returned

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a request was rejected as a bad request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadRequestKind {
    /// A `*_id` path segment is not a non-negative integer
    InvalidId,
    /// A body field is unknown, missing, or of the wrong type
    InvalidColumn,
    /// A body value references a row that does not exist
    InvalidKeyValue,
    /// The body is not JSON
    MalformedBody,
    /// `sort_by` names a column the list cannot be sorted by
    InvalidSortQuery,
    /// `order` is neither `asc` nor `desc`
    InvalidOrderQuery,
}

impl BadRequestKind {
    /// Message returned to the client
    pub fn message(&self) -> &'static str {
        match self {
            BadRequestKind::InvalidId => "Invalid id",
            BadRequestKind::InvalidColumn => "Invalid column value",
            BadRequestKind::InvalidKeyValue => "Invalid key value insert",
            BadRequestKind::MalformedBody => "Malformed request body",
            BadRequestKind::InvalidSortQuery => "Invalid sort query",
            BadRequestKind::InvalidOrderQuery => "Invalid order query",
        }
    }
}

impl fmt::Display for BadRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client error (400)
    #[error("{0}")]
    BadRequest(BadRequestKind),

    /// Missing resource (404). Holds the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unexpected failure (500)
    #[error("Internal error: {0}")]
    Fault(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Fault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the client
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Fault(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// The bad-request kind, if this is a bad request
    pub fn bad_request_kind(&self) -> Option<BadRequestKind> {
        match self {
            ApiError::BadRequest(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<BadRequestKind> for ApiError {
    fn from(kind: BadRequestKind) -> Self {
        ApiError::BadRequest(kind)
    }
}

/// Backend failure shape → client error kind.
///
/// | store                 | api                          |
/// |-----------------------|------------------------------|
/// | `ForeignKeyViolation` | `BadRequest(InvalidKeyValue)`|
/// | `ColumnMismatch`      | `BadRequest(InvalidColumn)`  |
/// | `Unavailable`         | `Fault`                      |
/// | `Backend`             | `Fault`                      |
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        debug!(error = %err, "translating store error");
        match err {
            StoreError::ForeignKeyViolation(_) => {
                ApiError::BadRequest(BadRequestKind::InvalidKeyValue)
            }
            StoreError::ColumnMismatch(_) => ApiError::BadRequest(BadRequestKind::InvalidColumn),
            StoreError::Unavailable(_) | StoreError::Backend(_) => ApiError::Fault(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.client_message(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Fault(detail) = &self {
            error!(detail = %detail, "request failed");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
