//! Kibana saved objects as stored in the `.kibana` Elasticsearch index
//!
//! Each submodule owns the wire types and the extract/load operations for
//! one kind of Kibana data.

pub mod saved_objects;

pub use saved_objects::{MultiGetFetcher, SavedObjectsExtractor, SavedObjectsLoader};
