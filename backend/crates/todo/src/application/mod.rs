//! Application Layer
//!
//! Owner-scoped use cases. Each takes the caller's account id from the
//! verified identity, never from the request body.

pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod modify_todo;

// Re-exports
pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use get_todo::GetTodoUseCase;
pub use list_todos::ListTodosUseCase;
pub use modify_todo::ModifyTodoUseCase;
