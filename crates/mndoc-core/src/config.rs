//! Build configuration loaded from `mndoc.toml`.
//!
//! Every table and key is optional. A missing config file is not an
//! error; the defaults describe the published MNScript feed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default URL of the published docs feed.
pub const DEFAULT_SOURCE_URL: &str = "https://mnscript.civilservers.net/json/mnscript_docs.json";

/// Default local snapshot file used for offline builds.
pub const DEFAULT_SOURCE_FILE: &str = "mnscript_docs.json";

/// Default directory the site content is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Errors produced while loading build configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the config file
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Build configuration, usually read from [`crate::CONFIG_FILE`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildConfig {
    pub site: SiteSection,
    pub source: SourceSection,
    pub output: OutputSection,
}

/// The `[site]` table: presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SiteSection {
    /// Site title, used in progress output.
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "MNScript".to_string(),
        }
    }
}

/// The `[source]` table: where the docs feed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SourceSection {
    /// Feed URL for online builds.
    pub url: String,

    /// Local snapshot path for offline builds.
    pub file: PathBuf,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            file: PathBuf::from(DEFAULT_SOURCE_FILE),
        }
    }
}

/// The `[output]` table: where generated content lands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputSection {
    /// Directory the markdown tree and sidebar are written into.
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl BuildConfig {
    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Read a configuration file, falling back to the defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BuildConfig::parse("").unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.site.title, "MNScript");
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.file, PathBuf::from(DEFAULT_SOURCE_FILE));
        assert_eq!(config.output.dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_full_config() {
        let config = BuildConfig::parse(
            r#"
            [site]
            title = "My Docs"

            [source]
            url = "https://example.com/docs.json"
            file = "snapshot.json"

            [output]
            dir = "site/content"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.source.url, "https://example.com/docs.json");
        assert_eq!(config.source.file, PathBuf::from("snapshot.json"));
        assert_eq!(config.output.dir, PathBuf::from("site/content"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = BuildConfig::parse("[source]\nfile = \"local.json\"\n").unwrap();
        assert_eq!(config.source.file, PathBuf::from("local.json"));
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.site.title, "MNScript");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = BuildConfig::parse("[site]\ntitle = \"x\"\ncolor = \"red\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mndoc.toml");
        fs::write(&path, "[site]\ntitle = \"Test Site\"\n").unwrap();

        let config = BuildConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "Test Site");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = BuildConfig::from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BuildConfig::default());
    }
}
