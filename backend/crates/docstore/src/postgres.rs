//! PostgreSQL backend
//!
//! Each collection is a table `(id UUID PRIMARY KEY, body JSONB NOT NULL)`.
//! Body filters use JSONB containment (`@>`), updates use a top-level
//! merge (`||`) checked inside a transaction. Table names come from [`Document::COLLECTION`], never
//! from request data.

use std::marker::PhantomData;

use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::filter::{Changes, Filter, ID_FIELD, parse_id};
use crate::store::DocumentStore;

const SELECTOR_PREDICATE: &str = "($1::uuid IS NULL OR id = $1) AND body @> $2";

/// PostgreSQL-backed document store
pub struct PgDocumentStore<D> {
    pool: PgPool,
    _marker: PhantomData<fn() -> D>,
}

impl<D> Clone for PgDocumentStore<D> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<D: Document> PgDocumentStore<D> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    fn decode(body: Json<Value>) -> StoreResult<D> {
        Ok(serde_json::from_value(body.0)?)
    }

    fn decode_all(rows: Vec<(Json<Value>,)>) -> StoreResult<Vec<D>> {
        rows.into_iter().map(|(body,)| Self::decode(body)).collect()
    }

    fn write_error(err: sqlx::Error) -> StoreError {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate {
                collection: D::COLLECTION,
            },
            other => StoreError::Backend(other),
        }
    }
}

impl<D: Document> DocumentStore<D> for PgDocumentStore<D> {
    async fn insert(&self, doc: &D) -> StoreResult<()> {
        let id = doc.id();
        let body = serde_json::to_value(doc)?;
        let sql = format!("INSERT INTO {} (id, body) VALUES ($1, $2)", D::COLLECTION);

        sqlx::query(&sql)
            .bind(id)
            .bind(Json(body))
            .execute(&self.pool)
            .await
            .map_err(Self::write_error)?;

        tracing::debug!(collection = D::COLLECTION, %id, "Document inserted");
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<D> {
        let id = parse_id(id)?;
        let sql = format!("SELECT body FROM {} WHERE id = $1", D::COLLECTION);

        let row: Option<(Json<Value>,)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((body,)) => Self::decode(body),
            None => Err(StoreError::NotFound {
                collection: D::COLLECTION,
            }),
        }
    }

    async fn get_all(&self) -> StoreResult<Vec<D>> {
        let sql = format!("SELECT body FROM {}", D::COLLECTION);
        let rows: Vec<(Json<Value>,)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Self::decode_all(rows)
    }

    async fn get_one(&self, filter: &Filter) -> StoreResult<D> {
        let resolved = filter.resolve()?;
        let sql = format!(
            "SELECT body FROM {} WHERE {} LIMIT 1",
            D::COLLECTION,
            SELECTOR_PREDICATE
        );

        let row: Option<(Json<Value>,)> = sqlx::query_as(&sql)
            .bind(resolved.id)
            .bind(Json(Value::Object(resolved.fields)))
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((body,)) => Self::decode(body),
            None => Err(StoreError::NotFound {
                collection: D::COLLECTION,
            }),
        }
    }

    async fn get_many(&self, filter: &Filter) -> StoreResult<Vec<D>> {
        let resolved = filter.resolve()?;
        let sql = format!(
            "SELECT body FROM {} WHERE {}",
            D::COLLECTION,
            SELECTOR_PREDICATE
        );

        let rows: Vec<(Json<Value>,)> = sqlx::query_as(&sql)
            .bind(resolved.id)
            .bind(Json(Value::Object(resolved.fields)))
            .fetch_all(&self.pool)
            .await?;

        Self::decode_all(rows)
    }

    async fn update(&self, selector: &Filter, changes: &Changes) -> StoreResult<()> {
        if selector.is_empty() {
            return Err(StoreError::UnscopedMutation {
                collection: D::COLLECTION,
            });
        }
        let resolved = selector.resolve()?;

        let mut changes = changes.clone();
        changes.remove(ID_FIELD);

        let sql = format!(
            "UPDATE {} SET body = body || $3 WHERE {} RETURNING body",
            D::COLLECTION,
            SELECTOR_PREDICATE
        );

        let mut tx = self.pool.begin().await?;

        let rows: Vec<(Json<Value>,)> = sqlx::query_as(&sql)
            .bind(resolved.id)
            .bind(Json(Value::Object(resolved.fields)))
            .bind(Json(Value::Object(changes)))
            .fetch_all(&mut *tx)
            .await
            .map_err(Self::write_error)?;

        if rows.is_empty() {
            tx.rollback().await?;
            return Err(StoreError::NotFound {
                collection: D::COLLECTION,
            });
        }

        // Merged bodies must still decode as `D`, or nothing is committed
        let affected = rows.len();
        if let Err(e) = Self::decode_all(rows) {
            tx.rollback().await?;
            tracing::debug!(collection = D::COLLECTION, error = %e, "Update rejected");
            return Err(e);
        }

        tx.commit().await?;

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
        let sql = format!("DELETE FROM {} WHERE {}", D::COLLECTION, SELECTOR_PREDICATE);

        let affected = sqlx::query(&sql)
            .bind(resolved.id)
            .bind(Json(Value::Object(resolved.fields)))
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(StoreError::NotFound {
                collection: D::COLLECTION,
            });
        }

        tracing::debug!(collection = D::COLLECTION, affected, "Documents deleted");
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!(collection = D::COLLECTION, "Database pool closed");
    }
}
