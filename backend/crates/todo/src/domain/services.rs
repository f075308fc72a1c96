//! Change allow-list
//!
//! Only `title`, `note`, `due_date` and `created_date` may be changed
//! through an update. Values must be strings; the two dates must be
//! RFC 3339. Every other key is dropped without complaint.

use chrono::DateTime;
use docstore::Changes;
use serde_json::Value;

use crate::error::{TodoError, TodoResult};

/// Keys a caller may change
pub const MUTABLE_FIELDS: &[&str] = &["title", "note", "due_date", "created_date"];

const DATE_FIELDS: &[&str] = &["due_date", "created_date"];

/// Reduce `changes` to the permitted keys, validating their values
pub fn sanitize_changes(changes: Changes) -> TodoResult<Changes> {
    let mut permitted = Changes::new();

    for (key, value) in changes {
        if !MUTABLE_FIELDS.contains(&key.as_str()) {
            tracing::debug!(field = %key, "Dropping non-mutable 2Do field");
            continue;
        }

        let Value::String(text) = &value else {
            return Err(TodoError::InvalidChange(format!("{key} must be a string")));
        };

        if DATE_FIELDS.contains(&key.as_str()) && DateTime::parse_from_rfc3339(text).is_err() {
            return Err(TodoError::InvalidChange(format!(
                "{key} must be an RFC 3339 timestamp"
            )));
        }

        permitted.insert(key, value);
    }

    Ok(permitted)
}
