//! Todo Store
//!
//! [`TodoRepository`] over any [`DocumentStore`] backend.

use docstore::{Changes, DocumentStore, Filter};
use kernel::id::AccountId;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::services::sanitize_changes;
use crate::error::{TodoError, TodoResult};

/// Todo persistence over a document store
#[derive(Clone)]
pub struct TodoStore<S> {
    store: S,
}

impl<S> TodoStore<S>
where
    S: DocumentStore<Todo>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying document store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Selector pinning both the todo and its owner
    fn owned(id: &str, owner: &AccountId) -> Filter {
        Filter::by_id(id).eq("ownerid", owner.to_string())
    }
}

impl<S> TodoRepository for TodoStore<S>
where
    S: DocumentStore<Todo>,
{
    async fn get_all_todos(&self) -> TodoResult<Vec<Todo>> {
        self.store.get_all().await.map_err(TodoError::Storage)
    }

    async fn get_todo_by_id(&self, id: &str) -> TodoResult<Todo> {
        self.store.get_by_id(id).await.map_err(|e| {
            TodoError::from_store(e, || TodoError::NotFound { id: id.to_string() })
        })
    }

    async fn get_todos_for_owner(&self, owner: &AccountId) -> TodoResult<Vec<Todo>> {
        self.store
            .get_many(&Filter::new().eq("ownerid", owner.to_string()))
            .await
            .map_err(TodoError::Storage)
    }

    async fn insert_todo(&self, todo: &Todo) -> TodoResult<()> {
        self.store.insert(todo).await.map_err(TodoError::Storage)
    }

    async fn modify_todo(&self, id: &str, owner: &AccountId, changes: Changes) -> TodoResult<()> {
        let changes = sanitize_changes(changes)?;
        self.store
            .update(&Self::owned(id, owner), &changes)
            .await
            .map_err(|e| TodoError::from_store(e, || TodoError::NoMatch))
    }

    async fn delete_todo(&self, id: &str, owner: &AccountId) -> TodoResult<()> {
        self.store
            .delete(&Self::owned(id, owner))
            .await
            .map_err(|e| TodoError::from_store(e, || TodoError::NoMatch))
    }
}
