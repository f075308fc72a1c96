//! Stored document contract

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A type that lives in a collection
///
/// The serialized form is the stored body. Top-level fields of that
/// body are what [`Filter`](crate::Filter) matches against.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (table) name
    const COLLECTION: &'static str;

    /// Body fields whose values must be unique across the collection
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    /// Primary key
    fn id(&self) -> Uuid;
}
