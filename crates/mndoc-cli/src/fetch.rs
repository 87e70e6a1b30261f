//! The `fetch` command: download the docs feed and save it as a local
//! snapshot for offline builds.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use mndoc_core::BuildConfig;

/// Options for the fetch command.
pub struct FetchOptions {
    /// Config file path.
    pub config: PathBuf,
    /// Snapshot path override.
    pub output: Option<PathBuf>,
}

/// Download the feed and write it out as pretty-printed JSON. The
/// snapshot keeps every field of the feed, including ones the build
/// does not use.
pub fn run(options: &FetchOptions) -> Result<()> {
    let config = BuildConfig::load_or_default(&options.config)
        .map_err(|e| anyhow::anyhow!("Failed to load '{}': {}", options.config.display(), e))?;

    let output = snapshot_path(options, &config);

    println!("Fetching: {}", config.source.url);
    let snapshot = mndoc_core::fetch_snapshot(&config.source.url)
        .map_err(|e| anyhow::anyhow!("Failed to fetch docs: {e}"))?;

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| anyhow::anyhow!("Failed to serialize snapshot: {e}"))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", parent.display(), e))?;
        }
    }
    fs::write(&output, json)
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", output.display(), e))?;

    println!("Saved snapshot: {}", output.display());
    Ok(())
}

/// The snapshot destination: the CLI override when given, otherwise the
/// configured source file.
fn snapshot_path(options: &FetchOptions, config: &BuildConfig) -> PathBuf {
    options
        .output
        .clone()
        .unwrap_or_else(|| config.source.file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path_defaults_to_config() {
        let options = FetchOptions {
            config: PathBuf::from("mndoc.toml"),
            output: None,
        };
        let config = BuildConfig::default();
        assert_eq!(
            snapshot_path(&options, &config),
            PathBuf::from("mnscript_docs.json")
        );
    }

    #[test]
    fn test_snapshot_path_override() {
        let options = FetchOptions {
            config: PathBuf::from("mndoc.toml"),
            output: Some(PathBuf::from("snapshots/feed.json")),
        };
        let config = BuildConfig::parse("[source]\nfile = \"other.json\"\n").unwrap();
        assert_eq!(
            snapshot_path(&options, &config),
            PathBuf::from("snapshots/feed.json")
        );
    }
}
