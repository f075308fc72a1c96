//! Verified Identity
//!
//! Attached by the access gate to exactly one request.

use kernel::id::AccountId;
use platform::token::Claims;

/// Caller identity, read-only once attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    account_id: AccountId,
    claims: Claims,
}

impl Identity {
    pub(crate) fn new(account_id: AccountId, claims: Claims) -> Self {
        Self { account_id, claims }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Build an identity without a token, for handler tests in other crates
    #[cfg(feature = "test-support")]
    pub fn for_account(account_id: AccountId) -> Self {
        Self {
            account_id,
            claims: Claims {
                sub: account_id.to_string(),
                iss: String::new(),
                exp: 0,
                iat: 0,
            },
        }
    }
}
