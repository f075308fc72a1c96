//! Document Store
//!
//! Id-addressed JSON document storage with field-equality queries.
//! Two interchangeable backends share the [`DocumentStore`] contract:
//! - [`PgDocumentStore`]: one PostgreSQL table per collection (`id UUID`, `body JSONB`)
//! - [`MemoryDocumentStore`]: process-local map, used by tests and `STORE_BACKEND=memory`

pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod postgres;
pub mod store;

pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use filter::{Changes, Filter};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::DocumentStore;
