//! Article Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Article-specific result type alias
pub type ArticleResult<T> = Result<T, ArticleError>;

/// Article-specific error variants
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Create request without a title
    #[error("Title is required.")]
    TitleRequired,

    /// Create request without a body
    #[error("Body is required.")]
    BodyRequired,

    /// Referenced article does not exist
    #[error("Unable to find article.")]
    NotFound,

    /// Request body did not parse as JSON of the expected shape
    #[error("{0}")]
    MalformedBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ArticleError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArticleError::TitleRequired
            | ArticleError::BodyRequired
            | ArticleError::MalformedBody(_) => ErrorKind::BadRequest,
            ArticleError::NotFound => ErrorKind::NotFound,
            ArticleError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError; server-side detail stays in logs only
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error.")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            ArticleError::Database(e) => {
                tracing::error!(error = %e, "Article database error");
            }
            _ => {
                tracing::debug!(error = %self, "Article error");
            }
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ArticleError::TitleRequired.status_code(), 400);
        assert_eq!(ArticleError::BodyRequired.status_code(), 400);
        assert_eq!(ArticleError::NotFound.status_code(), 404);
        assert_eq!(
            ArticleError::Database(sqlx::Error::RowNotFound).status_code(),
            500
        );
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(ArticleError::TitleRequired.to_string(), "Title is required.");
        assert_eq!(ArticleError::BodyRequired.to_string(), "Body is required.");
        assert_eq!(
            ArticleError::NotFound.to_string(),
            "Unable to find article."
        );
    }

    #[test]
    fn test_database_errors_are_opaque() {
        let err = ArticleError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_app_error().message(), "Internal server error.");
    }
}
