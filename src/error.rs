//! Error types for Liberia server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error kinds carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingFields,
    InvalidStatus,
    InvalidRating,
    NotFound,
    BadRequest,
    StoreFailure,
    CatalogFailure,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "missing_fields",
            ErrorCode::InvalidStatus => "invalid_status",
            ErrorCode::InvalidRating => "invalid_rating",
            ErrorCode::NotFound => "not_found",
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::StoreFailure => "store_failure",
            ErrorCode::CatalogFailure => "catalog_failure",
            ErrorCode::Internal => "internal",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Title, author, and genre are required")]
    MissingFields,

    #[error("Invalid status")]
    InvalidStatus,

    #[error("Rating between 1-5 is required for completed books")]
    InvalidRating,

    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// The standard "no such book" failure
    pub fn book_not_found() -> Self {
        AppError::NotFound("Book not found".to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingFields => ErrorCode::MissingFields,
            AppError::InvalidStatus => ErrorCode::InvalidStatus,
            AppError::InvalidRating => ErrorCode::InvalidRating,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Store(_) => ErrorCode::StoreFailure,
            AppError::Catalog(_) => ErrorCode::CatalogFailure,
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Caller-input failures, reported verbatim and never retried
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields | AppError::InvalidStatus | AppError::InvalidRating
        )
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Error kind (e.g. `invalid_rating`)
    pub code: String,
    /// Human readable message
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match &self {
            AppError::MissingFields | AppError::InvalidStatus | AppError::InvalidRating => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Catalog(msg) => {
                tracing::warn!("Catalog error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.as_str().to_string(),
            error: message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        assert!(AppError::MissingFields.is_validation());
        assert!(AppError::InvalidRating.is_validation());
        assert!(!AppError::book_not_found().is_validation());
        assert!(!AppError::Store(sqlx::Error::PoolTimedOut).is_validation());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidStatus.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::book_not_found().into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store(sqlx::Error::PoolTimedOut).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Catalog("timeout".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
