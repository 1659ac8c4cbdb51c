use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};

/// In-memory store keeping one ordered map per collection. Used by the
/// test suites and handy for running a service without a database; id
/// assignment happens under the write lock, so concurrent creates are
/// safe here too.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<i64, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn with_id(doc: Value, id: i64) -> Result<Value, StoreError> {
    let Value::Object(mut map) = doc else {
        return Err(StoreError::Malformed("document must be a JSON object".into()));
    };
    map.insert("_id".into(), Value::from(id));
    Ok(Value::Object(map))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|records| records.get(&id).cloned()))
    }

    async fn insert_new(&self, collection: &str, doc: Value) -> Result<i64, StoreError> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        let next = records.keys().next_back().copied().unwrap_or(0) + 1;
        records.insert(next, with_id(doc, next)?);
        Ok(next)
    }

    async fn replace(&self, collection: &str, id: i64, doc: Value) -> Result<bool, StoreError> {
        let replacement = with_id(doc, id)?;
        let mut collections = self.collections.write().await;
        let Some(existing) = collections.get_mut(collection).and_then(|records| records.get_mut(&id))
        else {
            return Ok(false);
        };
        if *existing == replacement {
            return Ok(false);
        }
        *existing = replacement;
        Ok(true)
    }

    async fn remove(&self, collection: &str, id: i64) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if let Some(records) = collections.get_mut(collection) {
            records.remove(&id);
        }
        Ok(())
    }
}
