//! List Todos Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Caller's todos, oldest first
    pub async fn execute(&self, owner: &AccountId) -> TodoResult<Vec<Todo>> {
        let mut todos = self.repo.get_todos_for_owner(owner).await?;
        todos.sort_by_key(|t| t.created_date);
        Ok(todos)
    }
}
