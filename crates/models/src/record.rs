use serde::{Deserialize, Serialize};

/// A persisted record: the service-assigned integer identifier plus the
/// resource's flat field set, stored under the MongoDB `_id` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(flatten)]
    pub record: R,
}
