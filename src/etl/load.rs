//! Loader trait for writing items to a destination

use eyre::Result;

/// Loader trait for loading items to a destination
///
/// Items are expected to be loaded in the order given. A loader that fails
/// part-way leaves the items before the failing one in place.
pub trait Loader: Send + Sync {
    /// The type of items to load
    type Item: Send;

    /// Load items to the destination
    ///
    /// Returns the number of items loaded
    ///
    /// # Errors
    /// Returns an error on the first item that cannot be loaded
    fn load(
        &self,
        items: Vec<Self::Item>,
    ) -> impl std::future::Future<Output = Result<usize>> + Send;
}
