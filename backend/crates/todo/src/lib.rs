//! 2Do (Todo) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Todo entity, change allow-list, repository trait
//! - `application/` - Owner-scoped CRUD use cases
//! - `infra/` - Todo storage over a [`docstore::DocumentStore`]
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every route sits behind the auth gate and receives an `Identity`
//! - Reads by id compare the stored owner with the caller; a mismatch
//!   looks exactly like a missing todo
//! - Updates and deletes carry the owner in the storage selector, so
//!   the check and the write are one operation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::todo::Todo;
pub use domain::repository::TodoRepository;
pub use error::{TodoError, TodoResult};
pub use infra::todo_store::TodoStore;
pub use presentation::router::todo_router;
