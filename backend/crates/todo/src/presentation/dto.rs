//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Create todo request
///
/// Owner and creation time are never taken from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
}
