//! Todo Entity

use chrono::{DateTime, Utc};
use docstore::Document;
use kernel::id::{AccountId, TodoId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single 2Do owned by one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub note: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    pub ownerid: AccountId,
}

impl Todo {
    /// New, incomplete todo created now
    pub fn new(owner: AccountId, title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            note: note.into(),
            created_date: Utc::now(),
            due_date: None,
            completed: false,
            ownerid: owner,
        }
    }

    pub fn is_owned_by(&self, account: &AccountId) -> bool {
        self.ownerid == *account
    }
}

impl Document for Todo {
    const COLLECTION: &'static str = "todos";

    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }
}
