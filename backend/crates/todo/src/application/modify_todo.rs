//! Modify Todo Use Case

use std::sync::Arc;

use docstore::Changes;
use kernel::id::AccountId;

use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

pub struct ModifyTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ModifyTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, owner: &AccountId, changes: Changes) -> TodoResult<()> {
        self.repo.modify_todo(id, owner, changes).await?;
        tracing::info!(todo_id = %id, owner = %owner, "2Do modified");
        Ok(())
    }
}
