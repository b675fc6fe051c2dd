//! Extractor trait for reading items from a source

use eyre::Result;

/// Extractor trait for extracting items from a source
///
/// Implemented by the search-based saved object enumerator and by the
/// export file reader.
///
/// # Example
/// ```no_run
/// use kibana_sync::etl::Extractor;
/// use eyre::Result;
///
/// struct FixedIds(Vec<String>);
///
/// impl Extractor for FixedIds {
///     type Item = String;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract all items, in source order
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, I/O, parsing, etc.)
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
