//! Elasticsearch HTTP client and authentication.
//!
//! This module provides the [`ElasticsearchClient`] used to talk to the
//! cluster that stores the `.kibana` index, along with [`Auth`].

mod auth;
mod elasticsearch;

pub use auth::Auth;
pub use elasticsearch::ElasticsearchClient;
