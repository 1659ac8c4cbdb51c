use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::FindOneOptions;
use mongodb::Database;
use serde_json::Value;

use super::{RecordStore, StoreError};

/// MongoDB-backed store: one collection per resource, integer `_id`.
///
/// Identifier assignment keeps the historical `max + 1` scheme but is made
/// safe by the unique `_id` index: a concurrent insert that loses the race
/// gets a duplicate-key error and retries with a fresh maximum.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }

    async fn max_id(&self, collection: &str) -> Result<Option<i64>, StoreError> {
        let options = FindOneOptions::builder().sort(doc! { "_id": -1 }).build();
        let top = self
            .collection(collection)
            .find_one(None, options)
            .await
            .map_err(backend)?;
        Ok(top.as_ref().and_then(record_id))
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn to_document(value: &Value) -> Result<Document, StoreError> {
    mongodb::bson::to_document(value).map_err(|e| StoreError::Malformed(e.to_string()))
}

fn to_json(doc: Document) -> Value {
    Bson::Document(doc).into_relaxed_extjson()
}

fn record_id(doc: &Document) -> Option<i64> {
    match doc.get("_id") {
        Some(Bson::Int64(n)) => Some(*n),
        Some(Bson::Int32(n)) => Some(i64::from(*n)),
        Some(Bson::Double(n)) if n.fract() == 0.0 => Some(*n as i64),
        _ => None,
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let mut cursor = self
            .collection(collection)
            .find(None, None)
            .await
            .map_err(backend)?;
        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(backend)? {
            records.push(to_json(document));
        }
        Ok(records)
    }

    async fn find(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(backend)?;
        Ok(found.map(to_json))
    }

    async fn insert_new(&self, collection: &str, doc: Value) -> Result<i64, StoreError> {
        loop {
            let next = self.max_id(collection).await?.unwrap_or(0) + 1;
            let mut document = to_document(&doc)?;
            document.insert("_id", Bson::Int64(next));
            match self.collection(collection).insert_one(&document, None).await {
                Ok(_) => return Ok(next),
                Err(e) if is_duplicate_key(&e) => continue,
                Err(e) => return Err(backend(e)),
            }
        }
    }

    async fn replace(&self, collection: &str, id: i64, doc: Value) -> Result<bool, StoreError> {
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id }, to_document(&doc)?, None)
            .await
            .map_err(backend)?;
        Ok(result.modified_count > 0)
    }

    async fn remove(&self, collection: &str, id: i64) -> Result<(), StoreError> {
        self.collection(collection)
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(backend)?;
        Ok(())
    }
}
