//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{MethodRouter, get, post},
};

use crate::domain::repository::AccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGate, require_identity};

/// Create the Auth router (sign-up and log-in, both ungated)
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .with_state(state)
}

/// Gated home route
pub fn home_route<R>(gate: AuthGate<R>) -> MethodRouter
where
    R: AccountRepository + Send + Sync + 'static,
{
    get(handlers::home).route_layer(from_fn_with_state(gate, require_identity::<R>))
}
