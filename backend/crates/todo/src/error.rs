//! Todo Error Types
//!
//! This module provides todo-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use docstore::StoreError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Hint returned for an unreadable create body
pub const BODY_FORMAT_HINT: &str =
    "Body format incorrect for 2Do. Try: { \"title\": \"Some Title\", \"note\": \"Example note\" }";

/// Todo-specific error variants
#[derive(Debug, Error)]
pub enum TodoError {
    /// Missing, or owned by someone else
    #[error("Failed to retrieve 2Do with id: {id}")]
    NotFound { id: String },

    /// Update or delete matched nothing for this owner
    #[error("2Do not found.")]
    NoMatch,

    /// Id is not in the store's identifier format
    #[error("Id is not a valid 2Do identifier: {0}")]
    InvalidIdentifier(String),

    /// A permitted change key carried a value of the wrong shape
    #[error("Change format incorrect for 2Do: {0}")]
    InvalidChange(String),

    /// Request body is not the expected JSON
    #[error("{}", BODY_FORMAT_HINT)]
    InvalidBody(String),

    #[error("Storage error: {0}")]
    Storage(StoreError),
}

impl TodoError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound { .. } | TodoError::NoMatch => ErrorKind::NotFound,
            TodoError::InvalidIdentifier(_)
            | TodoError::InvalidChange(_)
            | TodoError::InvalidBody(_) => ErrorKind::BadRequest,
            TodoError::Storage(e) if e.is_unavailable() => ErrorKind::ServiceUnavailable,
            TodoError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError; storage detail stays in the source
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        match self {
            TodoError::Storage(e) => AppError::new(kind, "").with_source(e),
            other => AppError::new(kind, other.to_string()),
        }
    }

    /// Map a store failure, using `absent` for "nothing matched"
    pub(crate) fn from_store(err: StoreError, absent: impl FnOnce() -> TodoError) -> Self {
        match err {
            StoreError::NotFound { .. } => absent(),
            StoreError::InvalidIdentifier(id) => TodoError::InvalidIdentifier(id),
            other => TodoError::Storage(other),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Todo request failed");
            }
            TodoError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "Unreadable 2Do body");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::error::BackendError;

    #[test]
    fn test_client_errors_keep_their_message() {
        let app = TodoError::NoMatch.into_app_error();
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.message(), "2Do not found.");

        let app = TodoError::InvalidBody("eof".to_string()).into_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), BODY_FORMAT_HINT);
    }

    #[test]
    fn test_storage_failure_is_opaque_with_source() {
        let err = TodoError::Storage(StoreError::UnscopedMutation { collection: "todos" });
        assert_eq!(err.status_code(), 500);

        let app = err.into_app_error();
        assert!(!app.message().contains("todos"));
        assert!(std::error::Error::source(&app).is_some());
    }

    #[test]
    fn test_unreachable_storage_is_unavailable() {
        let err = TodoError::Storage(StoreError::Backend(BackendError::PoolClosed));
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.into_app_error().status_code(), 503);
    }
}
