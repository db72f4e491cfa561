//! API error types and their HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{ErrorDetail, SharedError};
use thiserror::Error;

/// Detail sent to callers for any server-side failure
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Malformed stored record at {key}: {source}")]
    MalformedStoredRecord { key: String, source: SharedError },

    #[error("Invalid record {key}: {source}")]
    InvalidRecord { key: String, source: SharedError },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecord { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<redis::RedisError> for ApiError {
    fn from(err: redis::RedisError) -> Self {
        Self::store_unavailable(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ApiError::InvalidRecord { source, .. } => source.to_string(),
            _ => INTERNAL_ERROR_DETAIL.to_string(),
        };
        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
