//! Mndoc CLI - Command-line interface for the MNScript documentation generator

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod build;
mod fetch;

#[derive(Parser)]
#[command(name = "mndoc")]
#[command(version = mndoc_core::VERSION)]
#[command(about = "Documentation site generator for the MNScript scripting language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site content from the docs feed
    Build {
        /// Path to the config file
        #[arg(short, long, default_value = mndoc_core::CONFIG_FILE)]
        config: PathBuf,

        /// Output directory (overrides the config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Docs feed URL (overrides the config)
        #[arg(long)]
        source_url: Option<String>,

        /// Read the configured snapshot file instead of fetching
        #[arg(long)]
        offline: bool,
    },

    /// Download the docs feed and save it as a local snapshot
    Fetch {
        /// Path to the config file
        #[arg(short, long, default_value = mndoc_core::CONFIG_FILE)]
        config: PathBuf,

        /// Snapshot path (overrides the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            config,
            output,
            source_url,
            offline,
        } => {
            let options = build::BuildOptions {
                config,
                output,
                source_url,
                offline: offline || offline_env(),
            };
            build::run(&options)?;
        }

        Commands::Fetch { config, output } => {
            let options = fetch::FetchOptions { config, output };
            fetch::run(&options)?;
        }
    }

    Ok(())
}

/// Whether the `MNDOC_OFFLINE` environment variable requests an offline
/// build.
fn offline_env() -> bool {
    std::env::var_os("MNDOC_OFFLINE").is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["mndoc", "build"]).unwrap();
        match cli.command {
            Commands::Build {
                config,
                output,
                source_url,
                offline,
            } => {
                assert_eq!(config, PathBuf::from("mndoc.toml"));
                assert_eq!(output, None);
                assert_eq!(source_url, None);
                assert!(!offline);
            }
            Commands::Fetch { .. } => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_build_all_flags() {
        let cli = Cli::try_parse_from([
            "mndoc",
            "build",
            "--config",
            "other.toml",
            "--output",
            "site",
            "--source-url",
            "https://example.com/docs.json",
            "--offline",
        ])
        .unwrap();
        match cli.command {
            Commands::Build {
                config,
                output,
                source_url,
                offline,
            } => {
                assert_eq!(config, PathBuf::from("other.toml"));
                assert_eq!(output, Some(PathBuf::from("site")));
                assert_eq!(
                    source_url,
                    Some("https://example.com/docs.json".to_string())
                );
                assert!(offline);
            }
            Commands::Fetch { .. } => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_fetch_defaults() {
        let cli = Cli::try_parse_from(["mndoc", "fetch"]).unwrap();
        match cli.command {
            Commands::Fetch { config, output } => {
                assert_eq!(config, PathBuf::from("mndoc.toml"));
                assert_eq!(output, None);
            }
            Commands::Build { .. } => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_fetch_with_output() {
        let cli = Cli::try_parse_from(["mndoc", "fetch", "-o", "snapshots/feed.json"]).unwrap();
        match cli.command {
            Commands::Fetch { output, .. } => {
                assert_eq!(output, Some(PathBuf::from("snapshots/feed.json")));
            }
            Commands::Build { .. } => panic!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["mndoc"]).is_err());
    }
}
