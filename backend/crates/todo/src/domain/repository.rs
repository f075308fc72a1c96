//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use docstore::Changes;
use kernel::id::AccountId;

use crate::domain::entity::todo::Todo;
use crate::error::TodoResult;

/// Todo repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// Every todo of every owner
    async fn get_all_todos(&self) -> TodoResult<Vec<Todo>>;

    /// Find todo by id, regardless of owner
    async fn get_todo_by_id(&self, id: &str) -> TodoResult<Todo>;

    /// All todos owned by `owner`
    async fn get_todos_for_owner(&self, owner: &AccountId) -> TodoResult<Vec<Todo>>;

    /// Store a new todo
    async fn insert_todo(&self, todo: &Todo) -> TodoResult<()>;

    /// Apply permitted changes to a todo owned by `owner`
    async fn modify_todo(&self, id: &str, owner: &AccountId, changes: Changes) -> TodoResult<()>;

    /// Delete a todo owned by `owner`
    async fn delete_todo(&self, id: &str, owner: &AccountId) -> TodoResult<()>;
}
