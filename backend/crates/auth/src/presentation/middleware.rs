//! Access Gate
//!
//! Middleware for requiring a verified identity on protected routes.
//!
//! Rejections:
//! - malformed `Authorization` header → 400
//! - missing, invalid or expired token, or unknown account → 404
//! - blocked account → 401 with `WWW-Authenticate: Bearer`

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::token::{TokenService, extract_bearer};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::AccountRepository;
use crate::error::AuthError;

/// Middleware state
pub struct AuthGate<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> Clone for AuthGate<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

/// Middleware that requires a valid bearer token for a live account
///
/// On success the request carries an [`Identity`](crate::Identity)
/// extension for the handler.
pub async fn require_identity<R>(
    State(gate): State<AuthGate<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    // Absent header gives an empty token, rejected by verification below
    let token = extract_bearer(req.headers())?;

    let use_case = AuthenticateUseCase::new(gate.repo.clone(), gate.tokens.clone());
    let identity = use_case.execute(&token).await?;

    tracing::debug!(account_id = %identity.account_id(), "Request authenticated");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
