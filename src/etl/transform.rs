//! Transformer trait for converting items between pipeline stages

use eyre::Result;

/// Transformer trait for converting extracted items into loadable items
pub trait Transformer: Send + Sync {
    /// Input item type
    type Input: Send;

    /// Output item type after transformation
    type Output: Send;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if the item is structurally unusable
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform every item, stopping at the first failure
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}
