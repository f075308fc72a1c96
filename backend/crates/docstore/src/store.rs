//! Store capability trait

use std::future::Future;

use crate::document::Document;
use crate::error::StoreResult;
use crate::filter::{Changes, Filter};

/// Id-addressed document storage for one document type
///
/// Every backend reports a malformed id as `InvalidIdentifier` before
/// touching storage, and an empty match on `get_one`, `update` or
/// `delete` as `NotFound`.
pub trait DocumentStore<D: Document>: Send + Sync + 'static {
    fn insert(&self, doc: &D) -> impl Future<Output = StoreResult<()>> + Send;

    fn get_by_id(&self, id: &str) -> impl Future<Output = StoreResult<D>> + Send;

    fn get_all(&self) -> impl Future<Output = StoreResult<Vec<D>>> + Send;

    /// First document matching `filter`
    fn get_one(&self, filter: &Filter) -> impl Future<Output = StoreResult<D>> + Send;

    fn get_many(&self, filter: &Filter) -> impl Future<Output = StoreResult<Vec<D>>> + Send;

    /// Merge `changes` into every document matching `selector`
    ///
    /// An `id` key in `changes` is ignored. If any merged body no longer
    /// decodes as `D` the call fails with `Serialization` and no document
    /// is changed.
    fn update(
        &self,
        selector: &Filter,
        changes: &Changes,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    fn delete(&self, selector: &Filter) -> impl Future<Output = StoreResult<()>> + Send;

    /// Release backend resources
    fn close(&self) -> impl Future<Output = ()> + Send;
}
