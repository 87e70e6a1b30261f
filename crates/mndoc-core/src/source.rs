//! Docs feed input: remote fetch or local snapshot.
//!
//! A build reads the feed exactly once, before any page is generated.
//! There are no retries; a failed load aborts the whole build.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::config::BuildConfig;
use crate::model::Docs;

/// Errors that can occur while loading the docs feed.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Network error during fetch.
    #[error("network error: {0}")]
    Network(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Where the docs feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsSource {
    /// Fetch the feed over HTTP.
    Remote { url: String },
    /// Read a snapshot from disk.
    Local { path: PathBuf },
}

impl DocsSource {
    /// Pick the source for a build: the configured snapshot file when
    /// `offline` is set, the configured URL otherwise.
    #[must_use]
    pub fn select(config: &BuildConfig, offline: bool) -> Self {
        if offline {
            Self::Local {
                path: config.source.file.clone(),
            }
        } else {
            Self::Remote {
                url: config.source.url.clone(),
            }
        }
    }

    /// Load and deserialize the docs feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or read fails, or if the payload
    /// is not a valid docs document.
    pub fn load(&self) -> Result<Docs, DocsError> {
        match self {
            Self::Remote { url } => fetch_json(url),
            Self::Local { path } => {
                let text = fs::read_to_string(path)?;
                serde_json::from_str(&text).map_err(|e| DocsError::Json(e.to_string()))
            }
        }
    }
}

/// Fetch the raw feed without imposing the document schema, keeping any
/// fields this crate does not model. Used to take local snapshots.
///
/// # Errors
///
/// Returns an error if the fetch fails or the payload is not JSON.
pub fn fetch_snapshot(url: &str) -> Result<serde_json::Value, DocsError> {
    fetch_json(url)
}

fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, DocsError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!("mndoc/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| DocsError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| DocsError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DocsError::Network(format!(
            "docs feed returned status {}",
            response.status()
        )));
    }

    response.json().map_err(|e| DocsError::Json(e.to_string()))
}
