//! Account Entity

use std::fmt;

use docstore::Document;
use kernel::id::AccountId;
use platform::password::HashedPassword;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account
///
/// Stored as `{"id", "username", "password", "blocked"}` where `password`
/// is the PHC hash string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Unique, case-sensitive
    pub username: String,
    #[serde(rename = "password")]
    password_hash: String,
    #[serde(default)]
    pub blocked: bool,
}

impl Account {
    /// Create a new, unblocked account
    pub fn new(username: impl Into<String>, password: &HashedPassword) -> Self {
        Self {
            id: AccountId::new(),
            username: username.into(),
            password_hash: password.as_phc_string().to_string(),
            blocked: false,
        }
    }

    pub fn password(&self) -> HashedPassword {
        HashedPassword::from_stored(self.password_hash.as_str())
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

impl Document for Account {
    const COLLECTION: &'static str = "accounts";
    const UNIQUE_FIELDS: &'static [&'static str] = &["username"];

    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[HASH]")
            .field("blocked", &self.blocked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_shape() {
        let account = Account::new("alice", &HashedPassword::from_stored("$argon2id$x"));
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "$argon2id$x");
        assert_eq!(json["blocked"], false);
        assert_eq!(json["id"], account.id.to_string());
    }

    #[test]
    fn test_missing_blocked_defaults_to_false() {
        let id = AccountId::new();
        let json = serde_json::json!({
            "id": id.to_string(),
            "username": "bob",
            "password": "h",
        });
        let account: Account = serde_json::from_value(json).unwrap();
        assert!(!account.is_blocked());
    }

    #[test]
    fn test_debug_hides_hash() {
        let account = Account::new("alice", &HashedPassword::from_stored("$argon2id$secret"));
        assert!(!format!("{:?}", account).contains("secret"));
    }
}
