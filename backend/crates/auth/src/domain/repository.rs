//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AccountId;
use platform::password::HashedPassword;

use crate::domain::entity::account::Account;
use crate::error::AuthResult;

/// Account repository trait
///
/// Lookups answer `Ok(None)` for a missing account, including an id
/// that is not even well-formed.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find account by id (as carried in a token subject)
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<Account>>;

    /// Find account by username
    async fn find_by_name(&self, username: &str) -> AuthResult<Option<Account>>;

    /// Create a new account; a taken username is `DuplicateUsername`
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Block or unblock an account
    async fn set_blocked(&self, id: &AccountId, blocked: bool) -> AuthResult<()>;

    /// Replace the stored password hash
    async fn update_password(&self, id: &AccountId, password: &HashedPassword) -> AuthResult<()>;

    /// Delete an account
    async fn delete(&self, id: &AccountId) -> AuthResult<()>;
}
