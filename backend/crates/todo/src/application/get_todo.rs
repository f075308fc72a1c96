//! Get Todo Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

pub struct GetTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> GetTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Someone else's todo is reported exactly like a missing one
    pub async fn execute(&self, id: &str, owner: &AccountId) -> TodoResult<Todo> {
        let todo = self.repo.get_todo_by_id(id).await?;

        if !todo.is_owned_by(owner) {
            tracing::info!(
                todo_id = %id,
                owner = %todo.ownerid,
                caller = %owner,
                "2Do requested by non-owner"
            );
            return Err(TodoError::NotFound { id: id.to_string() });
        }

        Ok(todo)
    }
}
