//! Authenticate Use Case
//!
//! Token → verified claims → live account → identity.

use std::sync::Arc;

use platform::token::TokenService;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Resolve a bearer token (possibly empty) to an identity
    pub async fn execute(&self, token: &str) -> AuthResult<Identity> {
        let claims = self.tokens.verify(token)?;

        let account = self
            .repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::info!(subject = %claims.sub, "Token subject has no account");
                AuthError::AccountNotFound
            })?;

        if account.is_blocked() {
            tracing::warn!(account_id = %account.id, "Blocked account presented a valid token");
            return Err(AuthError::AccountBlocked);
        }

        Ok(Identity::new(account.id, claims))
    }
}
