//! Field-equality filters and change sets

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Key that addresses the primary key instead of a body field
pub const ID_FIELD: &str = "id";

/// Partial document applied on update (top-level merge)
pub type Changes = Map<String, Value>;

/// Conjunction of `field == value` terms
///
/// Values compare with JSONB containment, as `@>` does in Postgres:
/// scalars must be equal, an object matches when every given key
/// matches, and an array matches when each given element is found in
/// the stored array. Both backends evaluate it the same way.
///
/// ```
/// use docstore::Filter;
///
/// let filter = Filter::new().eq("ownerid", "a1").eq("completed", false);
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    terms: BTreeMap<String, Value>,
}

/// Filter with the id term parsed out
#[derive(Debug)]
pub(crate) struct ResolvedFilter {
    pub id: Option<Uuid>,
    pub fields: Map<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on the primary key only
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().eq(ID_FIELD, id.into())
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.insert(field.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Split off and validate the id term
    pub(crate) fn resolve(&self) -> StoreResult<ResolvedFilter> {
        let mut fields = Map::new();
        let mut id = None;

        for (field, value) in &self.terms {
            if field == ID_FIELD {
                id = Some(parse_id_value(value)?);
            } else {
                fields.insert(field.clone(), value.clone());
            }
        }

        Ok(ResolvedFilter { id, fields })
    }
}

impl ResolvedFilter {
    /// In-process evaluation, same semantics as the SQL predicate
    pub fn matches(&self, id: &Uuid, body: &Value) -> bool {
        if self.id.is_some_and(|wanted| wanted != *id) {
            return false;
        }
        self.fields
            .iter()
            .all(|(field, wanted)| body.get(field).is_some_and(|stored| contains(stored, wanted)))
    }
}

/// `stored @> wanted` below the top level
fn contains(stored: &Value, wanted: &Value) -> bool {
    match (stored, wanted) {
        (Value::Object(stored), Value::Object(wanted)) => wanted.iter().all(|(key, value)| {
            stored
                .get(key)
                .is_some_and(|inner| contains(inner, value))
        }),
        (Value::Array(stored), Value::Array(wanted)) => wanted
            .iter()
            .all(|value| stored.iter().any(|inner| contains(inner, value))),
        // 1 and 1.0 are the same jsonb number
        (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
        (Value::Object(_) | Value::Array(_), _) | (_, Value::Object(_) | Value::Array(_)) => false,
        (stored, wanted) => stored == wanted,
    }
}

/// Parse an id given as text
pub fn parse_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| StoreError::InvalidIdentifier(raw.to_string()))
}

fn parse_id_value(value: &Value) -> StoreResult<Uuid> {
    match value {
        Value::String(raw) => parse_id(raw),
        other => Err(StoreError::InvalidIdentifier(other.to_string())),
    }
}
