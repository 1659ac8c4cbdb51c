use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::validate::{self, FieldSpec};

/// One of the six reference resource types. Implementations supply the
/// collection name and the declarative validation table; the generic CRUD
/// service and HTTP layer do the rest.
pub trait ApiResource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Lowercase singular name, used in log fields.
    const NAME: &'static str;
    /// Capitalized name used in client-facing messages ("Weapon not found").
    const TITLE: &'static str;
    /// MongoDB collection holding this resource's records.
    const COLLECTION: &'static str;

    fn fields() -> &'static [FieldSpec];

    /// Validate a decoded JSON payload against the field table. Resources
    /// with cross-field constraints override this and call it first.
    fn validate_payload(payload: &Map<String, Value>) -> Result<(), ModelError> {
        validate::validate_fields(payload, Self::fields())
    }

    /// Hook for coercing wire-level field shapes before deserialization
    /// (e.g. the campaign player-character list). Default is a no-op.
    fn normalize(payload: Map<String, Value>) -> Map<String, Value> {
        payload
    }

    /// Validate and decode a payload into the record type. Unknown fields
    /// are dropped.
    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ModelError> {
        Self::validate_payload(payload)?;
        let normalized = Self::normalize(payload.clone());
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ModelError::Validation(e.to_string()))
    }
}
