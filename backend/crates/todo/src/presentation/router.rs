//! Todo Router

use auth::{AccountRepository, AuthGate, require_identity};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// Create the Todo router; every route sits behind `gate`
pub fn todo_router<R, A>(repo: R, gate: AuthGate<A>) -> Router
where
    R: TodoRepository + Send + Sync + 'static,
    A: AccountRepository + Send + Sync + 'static,
{
    let state = TodoAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<R>)
                .put(handlers::modify_todo::<R>)
                .delete(handlers::delete_todo::<R>),
        )
        .route_layer(from_fn_with_state(gate, require_identity::<A>))
        .with_state(state)
}
