//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the exact
//! client-facing messages; server-side variants are reported opaquely.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    // ------------------------------------------------------------------
    // Validation (ordered, first-failure-wins; see application layer)
    // ------------------------------------------------------------------
    /// Signup/signin without a username
    #[error("Username is required.")]
    UsernameRequired,

    /// Signup without an email
    #[error("Email is required.")]
    EmailRequired,

    /// Signup/signin without a password
    #[error("Password is required.")]
    PasswordRequired,

    /// Signup without a password confirmation
    #[error("Password confirm is required.")]
    PasswordConfirmRequired,

    /// Password and confirmation differ
    #[error("Passwords do not match.")]
    PasswordMismatch,

    // ------------------------------------------------------------------
    // Store conflicts (classified by constraint in the infra layer)
    // ------------------------------------------------------------------
    /// Username unique constraint fired
    #[error("Username is not available.")]
    UsernameTaken,

    /// Email unique constraint fired
    #[error("Email is not available.")]
    EmailTaken,

    // ------------------------------------------------------------------
    // Signin failures
    // ------------------------------------------------------------------
    /// No user with the given username
    #[error("Username is invalid.")]
    InvalidUsername,

    /// Password does not match the stored hash
    #[error("Password is invalid.")]
    InvalidPassword,

    // ------------------------------------------------------------------
    // Bearer-token gate
    // ------------------------------------------------------------------
    /// No Authorization header on a protected endpoint
    #[error("Authorization header is required.")]
    MissingAuthHeader,

    /// Authorization header present but not `Bearer <token>`
    #[error("Malformed authorization header.")]
    MalformedAuthHeader,

    /// Token failed verification (tampered, malformed, wrong signature,
    /// or expired)
    #[error("Invalid token.")]
    InvalidToken,

    // ------------------------------------------------------------------
    // Request shape
    // ------------------------------------------------------------------
    /// Request body did not parse as JSON of the expected shape
    #[error("{0}")]
    MalformedBody(String),

    // ------------------------------------------------------------------
    // Server-side failures (never shown to clients verbatim)
    // ------------------------------------------------------------------
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error (hashing or signing failure, corrupted state)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UsernameRequired
            | AuthError::EmailRequired
            | AuthError::PasswordRequired
            | AuthError::PasswordConfirmRequired
            | AuthError::PasswordMismatch
            | AuthError::UsernameTaken
            | AuthError::EmailTaken
            | AuthError::InvalidUsername
            | AuthError::InvalidPassword
            | AuthError::MalformedAuthHeader
            | AuthError::InvalidToken
            | AuthError::MalformedBody(_) => ErrorKind::BadRequest,
            AuthError::MissingAuthHeader => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    ///
    /// Server-side variants are reported with a generic message; the
    /// detail stays in logs only.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error.")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
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
            AuthError::InvalidUsername | AuthError::InvalidPassword => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
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
