//! Wire types for the `.kibana` search and multi-get APIs
//!
//! Example export bundle (the verbatim `_mget` response):
//! ```json
//! {
//!   "docs" : [
//!     {
//!       "_index" : ".kibana",
//!       "_type" : "dashboard",
//!       "_id" : "Overview",
//!       "_version" : 3,
//!       "found" : true,
//!       "_source" : { "title" : "Overview", "panelsJSON" : "[]" }
//!     }
//!   ]
//! }
//! ```

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index holding Kibana's saved objects
pub const KIBANA_INDEX: &str = ".kibana";

/// Saved object types exported, in export order
pub const SAVED_OBJECT_TYPES: [&str; 3] = ["search", "dashboard", "visualization"];

/// Hits requested per type; anything beyond this is not exported
pub const SEARCH_PAGE_SIZE: usize = 1000;

/// Document type every imported document is indexed under
pub const IMPORT_TYPE: &str = "search";

/// A saved object reference (id + type)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ObjectReference {
    #[serde(rename = "_id")]
    pub id: String,

    /// Elasticsearch document type ("search", "dashboard", "visualization")
    #[serde(rename = "_type")]
    pub object_type: String,
}

impl ObjectReference {
    pub fn new(object_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_type: object_type.into(),
        }
    }
}

impl std::fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.object_type)
    }
}

/// Response of `POST /.kibana/{type}/_search`; only the hit identities are read
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: SearchHits,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits {
    pub hits: Vec<SavedObjectHit>,
}

#[derive(Debug, Deserialize)]
pub struct SavedObjectHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub object_type: String,
}

impl SearchResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, SyncError> {
        serde_json::from_slice(body)
            .map_err(|e| SyncError::parse(format!("unexpected search response: {}", e)))
    }

    /// References for every hit, in response order
    pub fn references(self) -> impl Iterator<Item = ObjectReference> {
        self.hits.hits.into_iter().map(ObjectReference::from)
    }
}

impl From<SavedObjectHit> for ObjectReference {
    fn from(hit: SavedObjectHit) -> Self {
        Self {
            id: hit.id,
            object_type: hit.object_type,
        }
    }
}

/// Body of `POST /.kibana/_mget`
#[derive(Debug, Serialize)]
pub struct MultiGetRequest<'a> {
    pub docs: &'a [ObjectReference],
}

/// Parsed form of an export file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportBundle {
    pub docs: Vec<BundleDoc>,
}

/// One `_mget` result entry
///
/// Envelope fields other than `_id`, `_type` and `_source` (`_index`,
/// `_version`, `found`, ...) are kept in `envelope`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDoc {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,

    #[serde(flatten)]
    pub envelope: Map<String, Value>,
}

impl ExportBundle {
    pub fn from_slice(content: &[u8]) -> Result<Self, SyncError> {
        serde_json::from_slice(content).map_err(|e| SyncError::parse(e.to_string()))
    }

    pub fn count(&self) -> usize {
        self.docs.len()
    }
}
