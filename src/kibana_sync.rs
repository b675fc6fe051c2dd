//! Export and import of Kibana saved objects

use crate::client::{Auth, ElasticsearchClient};
use crate::etl::{Extractor, Pipeline};
use crate::kibana::saved_objects::{
    IndexRequestBuilder, MultiGetFetcher, SavedObjectsExtractor, SavedObjectsLoader,
};
use crate::storage::{BundleReader, BundleWriter};

use eyre::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Copies Kibana searches, dashboards and visualizations between an
/// Elasticsearch cluster and an export file.
///
/// Both operations issue their requests strictly one after another and stop
/// at the first failure.
///
/// # Example
/// ```no_run
/// use kibana_sync::KibanaSync;
///
/// # async fn example() -> eyre::Result<()> {
/// let sync = KibanaSync::try_new("http://localhost:9200", Some("elastic".into()), Some("changeme".into()))?;
/// sync.export("data.json").await?;
/// sync.import("data.json").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KibanaSync {
    client: ElasticsearchClient,
}

impl KibanaSync {
    /// Create a client for the cluster at `es_uri`.
    ///
    /// Requests carry Basic authentication when `username` is set.
    pub fn try_new(
        es_uri: impl Into<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let client = ElasticsearchClient::try_new(es_uri, Auth::new(username, password))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: ElasticsearchClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ElasticsearchClient {
        &self.client
    }

    /// Export every saved object to `path`.
    ///
    /// Returns the number of objects requested from the multi-get API. The
    /// file is only created once every request has succeeded.
    pub async fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        log::debug!("Start export from {}", self.client.bright_black());

        let references = SavedObjectsExtractor::new(self.client.clone())
            .extract()
            .await?;
        let content = MultiGetFetcher::new(self.client.clone())
            .fetch(&references)
            .await?;

        let writer = BundleWriter::new(path);
        writer.write(&content)?;

        log::info!(
            "Exported {} object(s) to {}",
            references.len().cyan(),
            writer.path().display().bright_black()
        );
        Ok(references.len())
    }

    /// Import every document of the export file at `path`.
    ///
    /// The file is fully parsed and validated before the first request.
    /// Returns the number of documents indexed.
    pub async fn import(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        log::info!("Start importing file {}", path.display().bright_black());

        let pipeline = Pipeline::new(
            BundleReader::new(path),
            IndexRequestBuilder,
            SavedObjectsLoader::new(self.client.clone()),
        );
        let count = pipeline.run().await?;

        log::info!(
            "Imported {} document(s) into {}",
            count.cyan(),
            self.client.bright_black()
        );
        Ok(count)
    }
}
