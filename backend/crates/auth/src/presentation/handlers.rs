//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use kernel::response::JsonResponse;
use platform::token::TokenService;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AccountView, LogInRequest, LogInResponse, SignUpRequest};
use crate::presentation::middleware::AuthGate;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R> Clone for AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    /// Fails when the config cannot produce a token service (e.g. empty secret)
    pub fn new(repo: R, config: AuthConfig) -> AuthResult<Self> {
        let tokens = config.token_service()?;
        Ok(Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        })
    }

    /// Gate sharing this state's repository and token service
    pub fn gate(&self) -> AuthGate<R> {
        AuthGate {
            repo: Arc::clone(&self.repo),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let result = format!("{} successfully signed up for 2Do service!", output.username);
    let view = AccountView {
        id: output.account_id.to_string(),
        username: output.username,
    };

    Ok((StatusCode::CREATED, Json(JsonResponse::with_data(result, view))))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LogInRequest>, JsonRejection>,
) -> AuthResult<Json<LogInResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case = LogInUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LogInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LogInResponse {
        result: "Successfully logged into 2Do".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Home
// ============================================================================

/// GET /api/
pub async fn home(Extension(identity): Extension<Identity>) -> Json<JsonResponse<()>> {
    tracing::debug!(account_id = %identity.account_id(), "Home route visited");
    Json(JsonResponse::message("Nothing to see here move along"))
}
