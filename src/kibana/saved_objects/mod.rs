//! Kibana saved objects (searches, dashboards, visualizations)
//!
//! Export enumerates the three types with `_search`, then fetches the full
//! documents with one `_mget`. Import replays each `_source` as an index
//! request.

mod extractor;
mod loader;
mod types;

pub use extractor::{MultiGetFetcher, SavedObjectsExtractor};
pub use loader::{IndexRequest, IndexRequestBuilder, SavedObjectsLoader};
pub use types::{
    BundleDoc, ExportBundle, IMPORT_TYPE, KIBANA_INDEX, MultiGetRequest, ObjectReference,
    SAVED_OBJECT_TYPES, SEARCH_PAGE_SIZE, SavedObjectHit, SearchHits, SearchResponse,
};
