//! Error taxonomy for export and import
//!
//! Every operation returns `eyre::Result`; the root cause of a failure that
//! the tool itself detects is a [`SyncError`], which callers can recover with
//! `report.downcast_ref::<SyncError>()`.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Elasticsearch answered with a non-success status
    #[error("Elasticsearch request failed ({status}): {body}")]
    Http { status: StatusCode, body: String },

    /// A response or the import file did not have the expected JSON shape
    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    /// The export file could not be opened, read or written
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status carried by an `Http` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
