//! Infrastructure Layer

pub mod todo_store;
