//! Sign Up Use Case
//!
//! Creates a new account.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub account_id: AccountId,
    pub username: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate password before touching storage
        let password =
            ClearTextPassword::with_min_length(input.password, self.config.min_password_length)?;

        // Check if username is taken
        if self.repo.find_by_name(&input.username).await?.is_some() {
            tracing::info!(username = %input.username, "Sign-up for existing username");
            return Err(AuthError::DuplicateUsername);
        }

        let hashed = password.hash()?;
        let account = Account::new(input.username, &hashed);

        // A concurrent sign-up can still win here; the store reports it
        // as DuplicateUsername
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account signed up"
        );

        Ok(SignUpOutput {
            account_id: account.id,
            username: account.username,
        })
    }
}
