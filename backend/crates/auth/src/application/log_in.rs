//! Log In Use Case
//!
//! Exchanges username and password for a signed token.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub username: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    pub account_id: AccountId,
    pub token: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LogInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Unknown username and wrong password fail identically
    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let candidate = ClearTextPassword::candidate(input.password);

        let Some(account) = self.repo.find_by_name(&input.username).await? else {
            tracing::info!(username = %input.username, "Log-in for unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !account.password().verify(&candidate) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&account.id.to_string())?;

        tracing::info!(account_id = %account.id, "Account logged in");

        Ok(LogInOutput {
            account_id: account.id,
            token,
        })
    }
}
