//! Saved objects import
//!
//! Replays exported documents via POST /.kibana/search/{id}

use super::types::{BundleDoc, IMPORT_TYPE, KIBANA_INDEX};
use crate::client::ElasticsearchClient;
use crate::error::SyncError;
use crate::etl::{Loader, Transformer};

use eyre::{Context, Result};
use owo_colors::OwoColorize;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A single document to index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    pub id: String,
    /// `_type` recorded in the export, informational only
    pub original_type: Option<String>,
    pub source: Value,
}

impl IndexRequest {
    /// Request path; always under the `search` type.
    ///
    /// The id is percent-encoded so that it stays one path segment.
    pub fn path(&self) -> String {
        format!(
            "/{}/{}/{}",
            KIBANA_INDEX,
            IMPORT_TYPE,
            utf8_percent_encode(&self.id, PATH_SEGMENT)
        )
    }
}

/// Turns export bundle entries into index requests
///
/// An entry without `_source` (for example a `"found": false` result) fails
/// the whole import before anything is sent.
#[derive(Debug, Default)]
pub struct IndexRequestBuilder;

impl Transformer for IndexRequestBuilder {
    type Input = BundleDoc;
    type Output = IndexRequest;

    fn transform(&self, doc: Self::Input) -> Result<Self::Output> {
        let source = doc.source.ok_or_else(|| {
            SyncError::parse(format!("document {} has no _source field", doc.id))
        })?;

        Ok(IndexRequest {
            id: doc.id,
            original_type: doc.object_type,
            source,
        })
    }
}

/// Loader indexing documents one by one into `.kibana`
///
/// Existing documents with the same id are overwritten. Loading stops at
/// the first rejected document; documents indexed before it stay indexed.
pub struct SavedObjectsLoader {
    client: ElasticsearchClient,
}

impl SavedObjectsLoader {
    pub fn new(client: ElasticsearchClient) -> Self {
        Self { client }
    }

    async fn index(&self, request: &IndexRequest) -> Result<()> {
        log::debug!("Processing doc {}", request.id.bright_black());
        if let Some(original) = &request.original_type
            && original != IMPORT_TYPE
        {
            log::debug!(
                "Document {} was exported as {}, indexing as {}",
                request.id,
                original,
                IMPORT_TYPE
            );
        }

        self.client
            .post_json_value(&request.path(), &request.source)
            .await?;
        Ok(())
    }
}

impl Loader for SavedObjectsLoader {
    type Item = IndexRequest;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        let total = items.len();

        for (n, request) in items.iter().enumerate() {
            self.index(request).await.with_context(|| {
                format!(
                    "Failed to import document {} ({} of {})",
                    request.id,
                    n + 1,
                    total
                )
            })?;
        }

        Ok(total)
    }
}
