//! Export bundle file operations

use crate::error::SyncError;
use crate::etl::Extractor;
use crate::kibana::saved_objects::{BundleDoc, ExportBundle};

use eyre::Result;
use std::path::{Path, PathBuf};

/// Read an export bundle from a file
pub struct BundleReader {
    path: PathBuf,
}

impl BundleReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole file
    ///
    /// # Errors
    /// `SyncError::Io` if the file cannot be read, `SyncError::Parse` if it
    /// is not a JSON object with a `docs` array.
    pub fn read(&self) -> Result<ExportBundle> {
        log::debug!("Loading file {}", self.path.display());
        let content = std::fs::read(&self.path).map_err(|e| SyncError::io(&self.path, e))?;
        Ok(ExportBundle::from_slice(&content)?)
    }
}

impl Extractor for BundleReader {
    type Item = BundleDoc;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        Ok(self.read()?.docs)
    }
}

/// Write raw export bytes to a file
pub struct BundleWriter {
    path: PathBuf,
}

impl BundleWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the file and write `content` unchanged
    pub fn write(&self, content: &[u8]) -> Result<()> {
        log::debug!("Writing export data to {}", self.path.display());
        std::fs::write(&self.path, content).map_err(|e| SyncError::io(&self.path, e))?;
        Ok(())
    }
}
