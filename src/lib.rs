//! Kibana Sync
//!
//! Exports Kibana searches, dashboards and visualizations from the `.kibana`
//! Elasticsearch index to a file, and imports them back.

pub mod cli;
pub mod client;
pub mod error;
pub mod etl;
pub mod kibana;
pub mod kibana_sync;
pub mod storage;

// Re-exports for convenience
pub use client::{Auth, ElasticsearchClient};
pub use error::SyncError;
pub use kibana_sync::KibanaSync;
