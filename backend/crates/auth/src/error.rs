//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer credential on the request
    #[error("Missing credential")]
    MissingCredential,

    /// Credential present but malformed or badly signed
    #[error("Invalid credential")]
    InvalidCredential,

    /// Credential valid but lacks the admin role
    #[error("Insufficient privilege")]
    InsufficientPrivilege,

    /// Login with an email no account has
    #[error("User not found")]
    AccountNotFound,

    /// Login with a wrong password
    #[error("Invalid password")]
    InvalidPassword,

    /// Input validation error (email shape, password policy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Login failures map to 400 (the wire contract surfaces "user not
    /// found" and "invalid password" as bad requests, not 404/401).
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredential | AuthError::InsufficientPrivilege => {
                StatusCode::FORBIDDEN
            }
            AuthError::AccountNotFound
            | AuthError::InvalidPassword
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredential => ErrorKind::Unauthorized,
            AuthError::InvalidCredential | AuthError::InsufficientPrivilege => ErrorKind::Forbidden,
            AuthError::AccountNotFound
            | AuthError::InvalidPassword
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AccountNotFound | AuthError::InvalidPassword => {
                tracing::warn!("Failed login attempt");
            }
            AuthError::InvalidCredential => {
                tracing::warn!("Rejected invalid credential");
            }
            AuthError::InsufficientPrivilege => {
                tracing::warn!("Admin route denied to non-admin credential");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
