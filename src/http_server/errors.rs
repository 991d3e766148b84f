//! # HTTP API Errors
//!
//! Every failure a handler can hit is mapped here to a status code and a
//! `{"message": "..."}` body. Internal faults are logged and answered with a
//! generic message; their detail never reaches the client.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tokio::task::JoinError;

use super::response::MessageResponse;
use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of every 500 response
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Unknown collection selector
    #[error("Invalid type specified")]
    InvalidCollection,

    /// Insert payload failed the record schema
    #[error("{0}")]
    ValidationFailed(#[from] SchemaError),

    /// Name already taken in the collection
    #[error("Item already exists")]
    DuplicateName,

    /// Named record absent
    #[error("Item not found")]
    NotFound,

    /// A query matched nothing
    #[error("{0}")]
    EmptyResult(&'static str),

    /// Body, path or query string could not be extracted
    #[error("{0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything unanticipated; the detail is logged only
    #[error("Internal Server Error")]
    InternalFault(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCollection
            | ApiError::ValidationFailed(_)
            | ApiError::DuplicateName
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::EmptyResult(_) => StatusCode::NOT_FOUND,
            ApiError::InternalFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidCollection(_) => ApiError::InvalidCollection,
            StoreError::DuplicateName(_) => ApiError::DuplicateName,
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::InternalFault(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::InternalFault(format!("store task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::InternalFault(detail) = &self {
            tracing::error!(%detail, "request failed with internal fault");
        }
        let body = Json(MessageResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
