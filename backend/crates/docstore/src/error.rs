//! Store Errors

use thiserror::Error;

/// Backend driver error, re-exported so callers need not depend on sqlx
pub use sqlx::Error as BackendError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Id is not a UUID; raised before any query runs
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("No document in {collection} matched")]
    NotFound { collection: &'static str },

    #[error("Document in {collection} violates a unique constraint")]
    Duplicate { collection: &'static str },

    /// Update or delete without any selector field
    #[error("Refusing to modify {collection} without a selector")]
    UnscopedMutation { collection: &'static str },

    #[error("Database error: {0}")]
    Backend(#[from] BackendError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// True for errors that mean "nothing there" from the caller's view
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::InvalidIdentifier(_)
        )
    }

    /// True when the backend could not be reached at all, as opposed to
    /// a query that ran and failed
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Backend(
                BackendError::PoolTimedOut | BackendError::PoolClosed | BackendError::Io(_)
            )
        )
    }
}
