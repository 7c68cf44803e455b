//! Research Error Types
//!
//! This module provides research-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Research-specific result type alias
pub type ResearchResult<T> = Result<T, ResearchError>;

/// Research-specific error variants
///
/// The taxonomy is deliberately coarse: every storage failure collapses to
/// one generic response; zero-row toggles and deletes are not errors at all.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Input validation error (empty title, non-positive stage count)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResearchError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResearchError::Validation(_) => StatusCode::BAD_REQUEST,
            ResearchError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResearchError::Validation(_) => ErrorKind::BadRequest,
            ResearchError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ResearchError::Database(e) => {
                tracing::error!(error = %e, "Research database error");
            }
            ResearchError::Validation(msg) => {
                tracing::debug!(message = %msg, "Research validation error");
            }
        }
    }
}

impl IntoResponse for ResearchError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
