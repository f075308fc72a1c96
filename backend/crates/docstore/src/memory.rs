//! In-memory backend
//!
//! Same contract as the PostgreSQL backend over a shared map. Bodies are
//! kept as JSON so updates merge exactly like `body || changes`.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::filter::{Changes, Filter, ID_FIELD, parse_id};
use crate::store::DocumentStore;

type Collection = HashMap<Uuid, Value>;

/// Process-local document store
///
/// Clones share the same underlying map.
pub struct MemoryDocumentStore<D> {
    docs: Arc<RwLock<Collection>>,
    _marker: PhantomData<fn() -> D>,
}

impl<D> Clone for MemoryDocumentStore<D> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
            _marker: PhantomData,
        }
    }
}

impl<D> Default for MemoryDocumentStore<D> {
    fn default() -> Self {
        Self {
            docs: Arc::new(RwLock::new(HashMap::new())),
            _marker: PhantomData,
        }
    }
}

impl<D: Document> MemoryDocumentStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    fn decode(body: &Value) -> StoreResult<D> {
        Ok(serde_json::from_value(body.clone())?)
    }

    fn not_found() -> StoreError {
        StoreError::NotFound {
            collection: D::COLLECTION,
        }
    }

    /// Does `body` collide with another document on a unique field
    fn violates_unique(docs: &Collection, id: &Uuid, body: &Value) -> bool {
        D::UNIQUE_FIELDS.iter().any(|field| {
            let Some(value) = body.get(*field) else {
                return false;
            };
            docs.iter()
                .any(|(other_id, other)| other_id != id && other.get(*field) == Some(value))
        })
    }
}

impl<D: Document> DocumentStore<D> for MemoryDocumentStore<D> {
    async fn insert(&self, doc: &D) -> StoreResult<()> {
        let id = doc.id();
        let body = serde_json::to_value(doc)?;

        // Check and insert under one write lock
        let mut docs = self.docs.write().await;
        if docs.contains_key(&id) || Self::violates_unique(&docs, &id, &body) {
            return Err(StoreError::Duplicate {
                collection: D::COLLECTION,
            });
        }
        docs.insert(id, body);

        tracing::debug!(collection = D::COLLECTION, %id, "Document inserted");
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<D> {
        let id = parse_id(id)?;
        let docs = self.docs.read().await;
        docs.get(&id).map(Self::decode).unwrap_or_else(|| Err(Self::not_found()))
    }

    async fn get_all(&self) -> StoreResult<Vec<D>> {
        let docs = self.docs.read().await;
        docs.values().map(Self::decode).collect()
    }

    async fn get_one(&self, filter: &Filter) -> StoreResult<D> {
        let resolved = filter.resolve()?;
        let docs = self.docs.read().await;
        docs.iter()
            .find(|(id, body)| resolved.matches(id, body))
            .map(|(_, body)| Self::decode(body))
            .unwrap_or_else(|| Err(Self::not_found()))
    }

    async fn get_many(&self, filter: &Filter) -> StoreResult<Vec<D>> {
        let resolved = filter.resolve()?;
        let docs = self.docs.read().await;
        docs.iter()
            .filter(|(id, body)| resolved.matches(id, body))
            .map(|(_, body)| Self::decode(body))
            .collect()
    }

    async fn update(&self, selector: &Filter, changes: &Changes) -> StoreResult<()> {
        if selector.is_empty() {
            return Err(StoreError::UnscopedMutation {
                collection: D::COLLECTION,
            });
        }
        let resolved = selector.resolve()?;

        let mut docs = self.docs.write().await;
        let targets: Vec<Uuid> = docs
            .iter()
            .filter(|(id, body)| resolved.matches(id, body))
            .map(|(id, _)| *id)
            .collect();

        if targets.is_empty() {
            return Err(Self::not_found());
        }

        // Build every merged body first so a failure leaves the map untouched
        let mut merged = Vec::with_capacity(targets.len());
        for id in targets {
            let mut body = docs.get(&id).cloned().unwrap_or(Value::Null);
            if let Value::Object(fields) = &mut body {
                for (key, value) in changes.iter() {
                    if key != ID_FIELD {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
            // Must still decode as D
            Self::decode(&body)?;
            if Self::violates_unique(&docs, &id, &body) {
                return Err(StoreError::Duplicate {
                    collection: D::COLLECTION,
                });
            }
            merged.push((id, body));
        }

        let affected = merged.len();
        docs.extend(merged);

        tracing::debug!(collection = D::COLLECTION, affected, "Documents updated");
        Ok(())
    }

    async fn delete(&self, selector: &Filter) -> StoreResult<()> {
        if selector.is_empty() {
            return Err(StoreError::UnscopedMutation {
                collection: D::COLLECTION,
            });
        }
        let resolved = selector.resolve()?;

        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|id, body| !resolved.matches(id, body));
        let affected = before - docs.len();

        if affected == 0 {
            return Err(Self::not_found());
        }

        tracing::debug!(collection = D::COLLECTION, affected, "Documents deleted");
        Ok(())
    }

    async fn close(&self) {}
}
