//! Account Store
//!
//! [`AccountRepository`] over any [`DocumentStore`] backend.

use docstore::{Changes, DocumentStore, Filter, StoreError};
use kernel::id::AccountId;
use platform::password::HashedPassword;
use serde_json::Value;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Account persistence over a document store
#[derive(Clone)]
pub struct AccountStore<S> {
    store: S,
}

impl<S> AccountStore<S>
where
    S: DocumentStore<Account>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying document store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Single lookup path for every finder
    ///
    /// "No such account" in any form becomes `None`; anything else is a
    /// storage failure.
    async fn lookup(&self, filter: Filter) -> AuthResult<Option<Account>> {
        match self.store.get_one(&filter).await {
            Ok(account) => Ok(Some(account)),
            Err(e) if e.is_absence() => {
                tracing::debug!(error = %e, "Account lookup found nothing");
                Ok(None)
            }
            Err(e) => Err(AuthError::Storage(e)),
        }
    }

    async fn modify(&self, id: &AccountId, changes: Changes) -> AuthResult<()> {
        self.store
            .update(&Filter::by_id(id.to_string()), &changes)
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => AuthError::AccountNotFound,
                other => AuthError::Storage(other),
            })
    }
}

impl<S> AccountRepository for AccountStore<S>
where
    S: DocumentStore<Account>,
{
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<Account>> {
        self.lookup(Filter::by_id(id)).await
    }

    async fn find_by_name(&self, username: &str) -> AuthResult<Option<Account>> {
        self.lookup(Filter::new().eq("username", username)).await
    }

    async fn create(&self, account: &Account) -> AuthResult<()> {
        self.store.insert(account).await.map_err(|e| match e {
            StoreError::Duplicate { .. } => AuthError::DuplicateUsername,
            other => AuthError::Storage(other),
        })
    }

    async fn set_blocked(&self, id: &AccountId, blocked: bool) -> AuthResult<()> {
        let mut changes = Changes::new();
        changes.insert("blocked".to_string(), Value::Bool(blocked));
        self.modify(id, changes).await?;

        tracing::info!(account_id = %id, blocked, "Account block flag changed");
        Ok(())
    }

    async fn update_password(&self, id: &AccountId, password: &HashedPassword) -> AuthResult<()> {
        let mut changes = Changes::new();
        changes.insert(
            "password".to_string(),
            Value::String(password.as_phc_string().to_string()),
        );
        self.modify(id, changes).await
    }

    async fn delete(&self, id: &AccountId) -> AuthResult<()> {
        self.store
            .delete(&Filter::by_id(id.to_string()))
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => AuthError::AccountNotFound,
                other => AuthError::Storage(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::MemoryDocumentStore;

    fn store() -> AccountStore<MemoryDocumentStore<Account>> {
        AccountStore::new(MemoryDocumentStore::new())
    }

    fn account(name: &str) -> Account {
        Account::new(name, &HashedPassword::from_stored("hash"))
    }

    #[tokio::test]
    async fn test_find_by_id_and_name() {
        let repo = store();
        let alice = account("alice");
        repo.create(&alice).await.unwrap();

        let by_id = repo.find_by_id(&alice.id.to_string()).await.unwrap();
        assert_eq!(by_id, Some(alice.clone()));

        let by_name = repo.find_by_name("alice").await.unwrap();
        assert_eq!(by_name, Some(alice));

        // Case-sensitive
        assert_eq!(repo.find_by_name("Alice").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_bad_or_unknown_id_is_none() {
        let repo = store();
        assert_eq!(repo.find_by_id("not-an-id").await.unwrap(), None);
        assert_eq!(
            repo.find_by_id(&AccountId::new().to_string()).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = store();
        repo.create(&account("alice")).await.unwrap();

        let err = repo.create(&account("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
    }

    #[tokio::test]
    async fn test_set_blocked() {
        let repo = store();
        let alice = account("alice");
        repo.create(&alice).await.unwrap();

        repo.set_blocked(&alice.id, true).await.unwrap();
        let fetched = repo.find_by_id(&alice.id.to_string()).await.unwrap().unwrap();
        assert!(fetched.is_blocked());

        let err = repo.set_blocked(&AccountId::new(), true).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_update_password_and_delete() {
        let repo = store();
        let alice = account("alice");
        repo.create(&alice).await.unwrap();

        repo.update_password(&alice.id, &HashedPassword::from_stored("new-hash"))
            .await
            .unwrap();
        let fetched = repo.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(fetched.password().as_phc_string(), "new-hash");

        repo.delete(&alice.id).await.unwrap();
        assert_eq!(repo.find_by_name("alice").await.unwrap(), None);
        assert!(matches!(
            repo.delete(&alice.id).await.unwrap_err(),
            AuthError::AccountNotFound
        ));
    }
}
