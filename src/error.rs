use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};

use crate::api_docs::ErrorResponse;
use crate::auth::jwt::JwtError;

/// Failure taxonomy shared by all handlers. Every non-2xx response the
/// service produces goes through one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Student not found")]
    NotFound,
    #[error("Student belongs to another instructor")]
    Forbidden,
    #[error("{0}")]
    Duplicate(String),
    #[error("Invalid username or password")]
    Unauthorized,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // Known datastore error codes map to the taxonomy; everything else
        // surfaces as a generic internal failure.
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return ApiError::Duplicate("Duplicate value violates a unique constraint".to_string());
        }
        tracing::error!("Database error: {:?}", err);
        ApiError::Internal("Database error".to_string())
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        tracing::error!("Failed to generate JWT token: {:?}", err);
        ApiError::Internal("Failed to generate authentication token".to_string())
    }
}
