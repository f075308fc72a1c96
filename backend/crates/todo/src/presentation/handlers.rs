//! HTTP Handlers

use auth::Identity;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use docstore::Changes;
use kernel::response::JsonResponse;
use std::sync::Arc;

use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodosUseCase,
    ModifyTodoUseCase,
};
use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};
use crate::presentation::dto::CreateTodoRequest;

/// Shared state for todo handlers
pub struct TodoAppState<R>
where
    R: TodoRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for TodoAppState<R>
where
    R: TodoRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// GET /api/todos
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> TodoResult<Json<JsonResponse<Vec<Todo>>>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = ListTodosUseCase::new(state.repo.clone())
        .execute(&identity.account_id())
        .await?;

    let result = format!("Successfully retrieved {} 2Dos", todos.len());
    Ok(Json(JsonResponse::with_data(result, todos)))
}

/// POST /api/todos
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| TodoError::InvalidBody(e.body_text()))?;

    let todo = CreateTodoUseCase::new(state.repo.clone())
        .execute(
            identity.account_id(),
            CreateTodoInput {
                title: req.title,
                note: req.note,
                due_date: req.due_date,
                completed: req.completed,
            },
        )
        .await?;

    let result = format!("Successfully created 2Do: {}", todo.id);
    Ok((StatusCode::CREATED, Json(JsonResponse::with_data(result, todo))))
}

/// GET /api/todos/{id}
pub async fn get_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> TodoResult<Json<JsonResponse<Todo>>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo = GetTodoUseCase::new(state.repo.clone())
        .execute(&id, &identity.account_id())
        .await?;

    let result = format!("Successfully retrieved 2Do: {}", todo.id);
    Ok(Json(JsonResponse::with_data(result, todo)))
}

/// PUT /api/todos/{id}
pub async fn modify_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<Changes>, JsonRejection>,
) -> TodoResult<Json<JsonResponse<()>>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let Json(changes) = payload.map_err(|e| TodoError::InvalidBody(e.body_text()))?;

    ModifyTodoUseCase::new(state.repo.clone())
        .execute(&id, &identity.account_id(), changes)
        .await?;

    Ok(Json(JsonResponse::message(format!(
        "Successfully modified 2Do: {id}"
    ))))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> TodoResult<Json<JsonResponse<()>>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    DeleteTodoUseCase::new(state.repo.clone())
        .execute(&id, &identity.account_id())
        .await?;

    Ok(Json(JsonResponse::message(format!(
        "Successfully deleted 2Do: {id}"
    ))))
}
