//! CLI helper functions

use crate::KibanaSync;
use clap::ValueEnum;
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

/// Environment variable read when `--user` is not given
pub const USERNAME_VAR: &str = "ELASTICSEARCH_USERNAME";
/// Environment variable read when `--password` is not given
pub const PASSWORD_VAR: &str = "ELASTICSEARCH_PASSWORD";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Replay an export file into Elasticsearch
    Import,
    /// Write all saved objects to an export file
    Export,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Import => write!(f, "import"),
            Self::Export => write!(f, "export"),
        }
    }
}

/// Log level for a number of `-v` flags: warn, info, then debug
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the sync client from CLI values, falling back to the environment
/// for credentials.
pub fn load_kibana_sync(
    es_uri: &str,
    user: Option<String>,
    password: Option<String>,
) -> Result<KibanaSync> {
    let user = user.or_else(|| std::env::var(USERNAME_VAR).ok());
    let password = password.or_else(|| std::env::var(PASSWORD_VAR).ok());

    KibanaSync::try_new(es_uri, user, password).context("Failed to create Elasticsearch client")
}

/// Run one action against `filename`
pub async fn run(sync: &KibanaSync, action: Action, filename: impl AsRef<Path>) -> Result<usize> {
    let filename = filename.as_ref();
    log::info!("Selecting action {}", action.cyan());

    match action {
        Action::Export => sync.export(filename).await,
        Action::Import => sync.import(filename).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "debug");
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::from_str("import", false), Ok(Action::Import));
        assert_eq!(Action::from_str("export", false), Ok(Action::Export));
        assert!(Action::from_str("sync", false).is_err());
        assert_eq!(Action::Export.to_string(), "export");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_kibana_sync_default_uri() {
        unsafe {
            std::env::remove_var(USERNAME_VAR);
            std::env::remove_var(PASSWORD_VAR);
        }

        let sync = load_kibana_sync("http://localhost:9200", None, None).unwrap();
        assert_eq!(sync.client().base(), "http://localhost:9200");
    }

    #[test]
    #[serial_test::serial]
    fn test_load_kibana_sync_credentials_from_env() {
        unsafe {
            std::env::set_var(USERNAME_VAR, "elastic");
            std::env::set_var(PASSWORD_VAR, "changeme");
        }

        let result = load_kibana_sync("http://localhost:9200", None, None);
        assert!(result.is_ok());

        unsafe {
            std::env::remove_var(USERNAME_VAR);
            std::env::remove_var(PASSWORD_VAR);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_load_kibana_sync_invalid_url() {
        let result = load_kibana_sync("not-a-valid-url", None, None);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .chain()
                .any(|e| e.to_string().contains("Invalid Elasticsearch URL"))
        );
    }
}
