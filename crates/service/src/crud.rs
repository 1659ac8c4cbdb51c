use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::error;

use models::record::Stored;
use models::resource::ApiResource;

use crate::errors::ServiceError;
use crate::storage::{RecordStore, StoreError};

/// Outcome of a full-replace update: either fields changed, or the stored
/// record already matched the submitted one ("already up to date").
#[derive(Debug)]
pub enum UpdateOutcome<R> {
    Updated(Stored<R>),
    Unchanged(Stored<R>),
}

impl<R> UpdateOutcome<R> {
    pub fn into_record(self) -> Stored<R> {
        match self {
            UpdateOutcome::Updated(record) | UpdateOutcome::Unchanged(record) => record,
        }
    }
}

/// Generic CRUD mediator between the HTTP layer and one collection.
/// Instantiated per resource type over an injected store handle.
pub struct CrudService<R: ApiResource> {
    store: Arc<dyn RecordStore>,
    _resource: PhantomData<R>,
}

impl<R: ApiResource> CrudService<R> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store, _resource: PhantomData }
    }

    /// Every record, storage-native order.
    pub async fn list(&self) -> Result<Vec<Stored<R>>, ServiceError> {
        let docs = self
            .store
            .list(R::COLLECTION)
            .await
            .map_err(|e| db_error::<R>("list", e))?;
        docs.into_iter().map(decode::<R>).collect()
    }

    /// Insert with a freshly assigned identifier; returns the stored
    /// record including the id.
    pub async fn create(&self, record: R) -> Result<Stored<R>, ServiceError> {
        let doc = encode(&record)?;
        let id = self
            .store
            .insert_new(R::COLLECTION, doc)
            .await
            .map_err(|e| db_error::<R>("create", e))?;
        Ok(Stored { id, record })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Stored<R>>, ServiceError> {
        let found = self
            .store
            .find(R::COLLECTION, id)
            .await
            .map_err(|e| db_error::<R>("get", e))?;
        found.map(decode::<R>).transpose()
    }

    /// Full replace. The record must exist; absent ids map to 404.
    pub async fn update(&self, id: i64, record: R) -> Result<UpdateOutcome<R>, ServiceError> {
        if self.get(id).await?.is_none() {
            return Err(ServiceError::not_found(R::TITLE));
        }
        let changed = self
            .store
            .replace(R::COLLECTION, id, encode(&record)?)
            .await
            .map_err(|e| db_error::<R>("update", e))?;
        let stored = Stored { id, record };
        Ok(if changed { UpdateOutcome::Updated(stored) } else { UpdateOutcome::Unchanged(stored) })
    }

    /// Remove and return the pre-deletion snapshot.
    pub async fn delete(&self, id: i64) -> Result<Stored<R>, ServiceError> {
        let Some(existing) = self.get(id).await? else {
            return Err(ServiceError::not_found(R::TITLE));
        };
        self.store
            .remove(R::COLLECTION, id)
            .await
            .map_err(|e| db_error::<R>("delete", e))?;
        Ok(existing)
    }
}

fn db_error<R: ApiResource>(operation: &str, err: StoreError) -> ServiceError {
    error!(resource = R::NAME, operation, error = %err, "storage operation failed");
    ServiceError::Db(err.to_string())
}

fn encode<R: ApiResource>(record: &R) -> Result<Value, ServiceError> {
    serde_json::to_value(record).map_err(|e| ServiceError::Db(e.to_string()))
}

fn decode<R: ApiResource>(doc: Value) -> Result<Stored<R>, ServiceError> {
    serde_json::from_value(doc)
        .map_err(|e| ServiceError::Db(format!("malformed {} document: {e}", R::NAME)))
}
