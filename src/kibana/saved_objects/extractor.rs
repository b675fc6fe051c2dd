//! Saved objects enumeration and multi-get
//!
//! Lists saved objects via POST /.kibana/{type}/_search and fetches their
//! full documents via POST /.kibana/_mget

use super::types::{
    KIBANA_INDEX, MultiGetRequest, ObjectReference, SAVED_OBJECT_TYPES, SEARCH_PAGE_SIZE,
    SearchResponse,
};
use crate::client::ElasticsearchClient;
use crate::etl::Extractor;

use eyre::{Context, Result};
use owo_colors::OwoColorize;

/// Extractor listing every search, dashboard and visualization
///
/// Types are queried one at a time in [`SAVED_OBJECT_TYPES`] order and the
/// references are concatenated in that order, each group in the order
/// Elasticsearch returned it. Only the first [`SEARCH_PAGE_SIZE`] hits of a
/// type are seen.
///
/// # Example
/// ```no_run
/// use kibana_sync::client::{Auth, ElasticsearchClient};
/// use kibana_sync::etl::Extractor;
/// use kibana_sync::kibana::SavedObjectsExtractor;
///
/// # async fn example() -> eyre::Result<()> {
/// let client = ElasticsearchClient::try_new("http://localhost:9200", Auth::None)?;
/// let references = SavedObjectsExtractor::new(client).extract().await?;
/// # Ok(())
/// # }
/// ```
pub struct SavedObjectsExtractor {
    client: ElasticsearchClient,
}

impl SavedObjectsExtractor {
    pub fn new(client: ElasticsearchClient) -> Self {
        Self { client }
    }

    /// Search one saved object type and collect its hit references
    async fn search_type(&self, object_type: &str) -> Result<Vec<ObjectReference>> {
        let path = format!(
            "/{}/{}/_search?size={}",
            KIBANA_INDEX, object_type, SEARCH_PAGE_SIZE
        );

        let response = self.client.post(&path).await?;
        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {} search response", object_type))?;

        let references: Vec<ObjectReference> = SearchResponse::from_slice(&body)?
            .references()
            .inspect(|reference| log::debug!("Processing {}", reference))
            .collect();

        if references.len() >= SEARCH_PAGE_SIZE {
            log::warn!(
                "Found {} {} objects, only the first {} are exported",
                references.len(),
                object_type,
                SEARCH_PAGE_SIZE
            );
        }

        Ok(references)
    }
}

impl Extractor for SavedObjectsExtractor {
    type Item = ObjectReference;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        let mut references = Vec::new();

        for object_type in SAVED_OBJECT_TYPES {
            log::debug!("Processing type {}", object_type.cyan());
            let found = self.search_type(object_type).await?;
            log::debug!("Found {} {} object(s)", found.len(), object_type);
            references.extend(found);
        }

        log::info!("Found {} saved object(s)", references.len());
        Ok(references)
    }
}

/// Fetches full documents for a list of references with one `_mget`
pub struct MultiGetFetcher {
    client: ElasticsearchClient,
}

impl MultiGetFetcher {
    pub fn new(client: ElasticsearchClient) -> Self {
        Self { client }
    }

    /// POST the references to `_mget?pretty` and return the raw response body
    ///
    /// The body is returned untouched so it can be written out byte for byte.
    pub async fn fetch(&self, references: &[ObjectReference]) -> Result<Vec<u8>> {
        let path = format!("/{}/_mget?pretty", KIBANA_INDEX);
        let request = serde_json::to_value(MultiGetRequest { docs: references })?;

        log::debug!("Fetching {} document(s)", references.len());
        let response = self.client.post_json_value(&path, &request).await?;
        let body = response
            .bytes()
            .await
            .with_context(|| "Failed to read multi-get response")?;

        Ok(body.to_vec())
    }
}
