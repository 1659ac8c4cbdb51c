//! Storage abstraction for the CRUD engine.
//!
//! Stores deal in plain JSON documents keyed by an integer `_id` inside a
//! named collection; the service layer handles typed encoding/decoding.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Backend(String),
    #[error("malformed document: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All documents of a collection in storage-native order.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Point lookup by `_id`. Absence is `Ok(None)`, never an error.
    async fn find(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError>;

    /// Insert a document, assigning the next identifier
    /// (`max(existing) + 1`, 1 when empty) atomically with respect to
    /// concurrent inserts. Returns the assigned id.
    async fn insert_new(&self, collection: &str, doc: Value) -> Result<i64, StoreError>;

    /// Replace the document with the given `_id` wholesale. Returns whether
    /// the stored document actually changed.
    async fn replace(&self, collection: &str, id: i64, doc: Value) -> Result<bool, StoreError>;

    /// Delete by `_id`. Deleting an absent id is not an error; callers
    /// check existence first.
    async fn remove(&self, collection: &str, id: i64) -> Result<(), StoreError>;
}
