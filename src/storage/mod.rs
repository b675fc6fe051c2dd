//! Export file storage
//!
//! The export file is the multi-get response body, written as received and
//! read back as an [`ExportBundle`](crate::kibana::saved_objects::ExportBundle).

mod bundle;

pub use bundle::{BundleReader, BundleWriter};
