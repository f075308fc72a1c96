//! Create Todo Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Create todo input
pub struct CreateTodoInput {
    pub title: String,
    pub note: String,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
}

pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: AccountId, input: CreateTodoInput) -> TodoResult<Todo> {
        let mut todo = Todo::new(owner, input.title, input.note);
        todo.due_date = input.due_date;
        todo.completed = input.completed;

        self.repo.insert_todo(&todo).await?;

        tracing::info!(todo_id = %todo.id, owner = %owner, "2Do created");
        Ok(todo)
    }
}
