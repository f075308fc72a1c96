//! Delete Todo Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, owner: &AccountId) -> TodoResult<()> {
        self.repo.delete_todo(id, owner).await?;
        tracing::info!(todo_id = %id, owner = %owner, "2Do deleted");
        Ok(())
    }
}
