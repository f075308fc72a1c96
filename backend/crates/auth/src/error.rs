//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Anything that goes wrong while verifying a token or resolving its
//! account answers 404 with the default message, so a caller cannot
//! tell a bad token from a deleted account.

use axum::response::{IntoResponse, Response};
use docstore::StoreError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization header present but not `Bearer <token>`
    #[error("Authorization header format must be Bearer {{token}}")]
    MalformedAuthHeader,

    /// Signature, expiry, algorithm or shape check failed
    #[error("Token rejected: {0}")]
    InvalidToken(TokenError),

    /// Token subject names no account
    #[error("Account not found")]
    AccountNotFound,

    #[error("Account is blocked")]
    AccountBlocked,

    #[error("User already exists with username")]
    DuplicateUsername,

    #[error("Password must be above {} characters in length", .0.min())]
    WeakPassword(PasswordPolicyError),

    /// Unknown username or wrong password
    #[error("Failure to log in")]
    InvalidCredentials,

    /// Request body is not the expected JSON
    #[error("Body format incorrect: {0}")]
    InvalidBody(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Token signing or password hashing could not run
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MalformedAuthHeader
            | AuthError::DuplicateUsername
            | AuthError::WeakPassword(_)
            | AuthError::InvalidCredentials
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::InvalidToken(_) | AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::AccountBlocked => ErrorKind::Unauthorized,
            AuthError::Storage(e) if e.is_unavailable() => ErrorKind::ServiceUnavailable,
            AuthError::Storage(_) | AuthError::Configuration(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    ///
    /// Gate rejections and internal failures carry no detail to the client.
    /// A storage failure travels along as the source.
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        match self {
            AuthError::InvalidToken(_)
            | AuthError::AccountNotFound
            | AuthError::AccountBlocked
            | AuthError::InvalidBody(_) => AppError::new(kind, ""),
            AuthError::Storage(e) => {
                AppError::new(kind, "Failure to process request: Internal Error").with_source(e)
            }
            AuthError::Configuration(_) => {
                AppError::new(kind, "Failure to process request: Internal Error")
            }
            other => AppError::new(kind, other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Auth request failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountBlocked => {
                tracing::warn!("Blocked account attempted access");
            }
            AuthError::InvalidToken(e) => {
                tracing::info!(reason = %e, "Token rejected");
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
        self.into_app_error().into_response()
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MalformedHeader => AuthError::MalformedAuthHeader,
            TokenError::Configuration(msg) => AuthError::Configuration(msg),
            other => AuthError::InvalidToken(other),
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::WeakPassword(err)
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::error::BackendError;

    #[test]
    fn test_gate_status_mapping() {
        assert_eq!(AuthError::MalformedAuthHeader.status_code(), 400);
        assert_eq!(AuthError::InvalidToken(TokenError::Expired).status_code(), 404);
        assert_eq!(AuthError::AccountNotFound.status_code(), 404);
        assert_eq!(AuthError::AccountBlocked.status_code(), 401);
    }

    #[test]
    fn test_token_errors_are_opaque() {
        let app = AuthError::InvalidToken(TokenError::InvalidSignature).into_app_error();
        assert_eq!(app.message(), "Failure to retrieve objects");

        let app = AuthError::AccountBlocked.into_app_error();
        assert_eq!(app.message(), "The request requires user authentication.");
    }

    #[test]
    fn test_sign_up_messages_are_verbatim() {
        assert_eq!(
            AuthError::DuplicateUsername.into_app_error().message(),
            "User already exists with username"
        );
        let weak = AuthError::from(PasswordPolicyError::TooShort { min: 6, actual: 3 });
        assert_eq!(
            weak.into_app_error().message(),
            "Password must be above 6 characters in length"
        );
        assert_eq!(
            AuthError::InvalidCredentials.into_app_error().message(),
            "Failure to log in"
        );
    }

    #[test]
    fn test_token_error_conversion() {
        assert!(matches!(
            AuthError::from(TokenError::MalformedHeader),
            AuthError::MalformedAuthHeader
        ));
        assert!(matches!(
            AuthError::from(TokenError::Configuration("x".into())),
            AuthError::Configuration(_)
        ));
        assert!(matches!(
            AuthError::from(TokenError::WrongAlgorithm("HS512".into())),
            AuthError::InvalidToken(TokenError::WrongAlgorithm(_))
        ));
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err = AuthError::Storage(StoreError::Serialization(
            serde_json::from_str::<u8>("\"x\"").unwrap_err(),
        ));
        assert_eq!(err.status_code(), 500);

        let app = err.into_app_error();
        assert_eq!(app.message(), "Failure to process request: Internal Error");
        assert!(std::error::Error::source(&app).is_some());
    }

    #[test]
    fn test_unreachable_storage_is_unavailable() {
        let err = AuthError::Storage(StoreError::Backend(BackendError::PoolTimedOut));
        assert_eq!(err.status_code(), 503);

        let app = err.into_app_error();
        assert_eq!(app.kind(), ErrorKind::ServiceUnavailable);
        assert!(!app.message().contains("pool"));
        assert!(std::error::Error::source(&app).is_some());
    }
}
