//! Elasticsearch client module
//!
//! Provides `ElasticsearchClient` for issuing POST requests against the
//! cluster holding the `.kibana` index.

use super::Auth;
use crate::error::SyncError;
use eyre::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use url::Url;

/// Elasticsearch client for making API requests.
///
/// Request URLs are built by appending the API path to the base URL exactly
/// as it was given, so `http://es:9200` and `http://es:9200/` produce
/// different request paths.
///
/// # Example
/// ```no_run
/// use kibana_sync::client::{Auth, ElasticsearchClient};
///
/// # async fn example() -> eyre::Result<()> {
/// let client = ElasticsearchClient::try_new("http://localhost:9200", Auth::None)?;
/// let response = client.post("/.kibana/dashboard/_search?size=1000").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ElasticsearchClient {
    client: Client,
    base: String,
}

impl ElasticsearchClient {
    /// Create a new client from a base URL and an auth mode.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The base URL is not an absolute `http`/`https` URL
    /// - The HTTP client cannot be built
    pub fn try_new(base: impl Into<String>, auth: Auth) -> Result<Self> {
        let base = base.into();
        let url =
            Url::parse(&base).with_context(|| format!("Invalid Elasticsearch URL: {}", base))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            eyre::bail!(
                "Invalid Elasticsearch URL: {} (expected an http or https origin)",
                base
            );
        }

        let mut headers = HeaderMap::new();
        if let Some(credentials) = auth.header_value() {
            let mut value: HeaderValue = credentials.parse()?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        log::debug!("Using {} authentication", auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client, base })
    }

    /// Get the base URL as it was configured.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full request URL for an API path starting with `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// POST with an empty body.
    pub async fn post(&self, path: &str) -> Result<Response> {
        self.request(path, None).await
    }

    /// POST with a JSON body.
    pub async fn post_json_value(&self, path: &str, value: &serde_json::Value) -> Result<Response> {
        let body = serde_json::to_vec(value)?;
        self.request(path, Some(body)).await
    }

    /// POST a request and turn a non-success status into [`SyncError::Http`].
    async fn request(&self, path: &str, body: Option<Vec<u8>>) -> Result<Response> {
        let url = self.url_for(path);
        log::trace!("POST {}", url);

        let request = match body {
            Some(body) => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
            None => self.client.post(&url),
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("POST {} returned {}", url, status);
            return Err(SyncError::Http { status, body }.into());
        }

        Ok(response)
    }
}

impl std::fmt::Display for ElasticsearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)
    }
}
