//! Router assembly

use std::time::Duration;

use auth::{AccountRepository, AuthAppState, AuthConfig, AuthResult, auth_router, home_route};
use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use todo::{TodoRepository, todo_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Fixed per-request deadline
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the full `/api` router over the given repositories
///
/// | Route | Gate |
/// |---|---|
/// | `POST /api/signup`, `POST /api/login` | no |
/// | `GET /api/` | yes |
/// | `GET, POST /api/todos` | yes |
/// | `GET, PUT, DELETE /api/todos/{id}` | yes |
pub fn build_app<A, T>(
    accounts: A,
    todos: T,
    auth_config: AuthConfig,
    allowed_origins: Vec<HeaderValue>,
) -> AuthResult<Router>
where
    A: AccountRepository + Send + Sync + 'static,
    T: TodoRepository + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(accounts, auth_config)?;
    let gate = auth_state.gate();

    let api = auth_router(auth_state).merge(todo_router(todos, gate.clone()));

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    Ok(Router::new()
        .route("/api/", home_route(gate))
        .nest("/api", api)
        .layer(timeout_layer(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Answers 408 once `deadline` passes
fn timeout_layer(deadline: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, deadline)
}
