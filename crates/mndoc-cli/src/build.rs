//! The `build` command: load the docs feed, render every page, and
//! write the site content tree.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use mndoc_core::{build_sidebar, BuildConfig, DocsSource, Page, SiteDocs};

/// Options for the build command.
pub struct BuildOptions {
    /// Config file path.
    pub config: PathBuf,
    /// Output directory override.
    pub output: Option<PathBuf>,
    /// Docs feed URL override.
    pub source_url: Option<String>,
    /// Read the local snapshot instead of fetching.
    pub offline: bool,
}

/// Run a full site build.
pub fn run(options: &BuildOptions) -> Result<()> {
    let config = load_config(options)?;

    let source = DocsSource::select(&config, options.offline);
    match &source {
        DocsSource::Remote { url } => {
            println!("Fetching docs for {}: {url}", config.site.title);
        }
        DocsSource::Local { path } => {
            println!("Reading docs for {}: {}", config.site.title, path.display());
        }
    }

    let mut docs = source
        .load()
        .map_err(|e| anyhow::anyhow!("Failed to load docs: {e}"))?;
    docs.normalize();

    let site = SiteDocs::generate(&docs);
    write_site(&config.output.dir, &site)
}

/// Load the build configuration and apply the command-line overrides
/// on top of the file values.
fn load_config(options: &BuildOptions) -> Result<BuildConfig> {
    let mut config = BuildConfig::load_or_default(&options.config)
        .map_err(|e| anyhow::anyhow!("Failed to load '{}': {}", options.config.display(), e))?;

    if let Some(url) = &options.source_url {
        config.source.url = url.clone();
    }
    if let Some(dir) = &options.output {
        config.output.dir = dir.clone();
    }

    Ok(config)
}

/// Write every page, the section index pages, and the sidebar file.
fn write_site(out_dir: &Path, site: &SiteDocs) -> Result<()> {
    let events_dir = out_dir.join("events");
    let libraries_dir = out_dir.join("libraries");
    create_dir(&events_dir)?;
    create_dir(&libraries_dir)?;

    let mut paths = Vec::new();

    for page in &site.events {
        write_page(&events_dir, page)?;
        paths.push(format!("events/{}", page.path));
    }
    println!("Generated: {} event page(s)", site.events.len());

    for page in &site.libraries {
        write_page(&libraries_dir, page)?;
        paths.push(format!("libraries/{}", page.path));
    }
    println!("Generated: {} library page(s)", site.libraries.len());

    write_file(&events_dir.join("index.md"), &events_index(site))?;
    paths.push("events/index".to_string());
    write_file(&libraries_dir.join("index.md"), &libraries_index(site))?;
    paths.push("libraries/index".to_string());

    let sidebar = build_sidebar(&paths);
    let json = serde_json::to_string_pretty(&sidebar)
        .map_err(|e| anyhow::anyhow!("Failed to serialize sidebar: {e}"))?;
    let sidebar_path = out_dir.join("sidebar.json");
    write_file(&sidebar_path, &json)?;
    println!("Generated: {}", sidebar_path.display());

    println!("\nSite content generated in: {}", out_dir.display());
    Ok(())
}

/// Write one page under its section directory, creating intermediate
/// directories for class method pages.
fn write_page(section_dir: &Path, page: &Page) -> Result<()> {
    let path = section_dir.join(format!("{}.md", page.path));
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    let content = format!("{}{}", frontmatter(page), page.content);
    write_file(&path, &content)
}

/// Render the YAML frontmatter block for a page.
fn frontmatter(page: &Page) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", quote_yaml(&page.title)),
    ];
    if let Some(desc) = &page.desc {
        lines.push(format!("description: {}", quote_yaml(desc)));
    }
    lines.push(format!("search: {}", quote_yaml(&page.search)));
    lines.push("---".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Quote a YAML scalar when it contains characters that would change
/// its meaning unquoted. Backslashes are escaped before the quote and
/// newline escapes are added.
fn quote_yaml(value: &str) -> String {
    if value.contains(':')
        || value.contains('#')
        || value.contains('"')
        || value.contains('\\')
        || value.contains('\n')
        || value.starts_with(' ')
    {
        format!(
            "\"{}\"",
            value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('\n', "\\n")
        )
    } else {
        value.to_string()
    }
}

/// Landing page for the events section.
fn events_index(site: &SiteDocs) -> String {
    let mut index = String::from("# Events\n\n");
    for page in &site.events {
        writeln!(index, "- [{}](/events/{})", page.title, page.path).unwrap();
    }
    index
}

/// Landing page for the libraries section, listing each library
/// overview page.
fn libraries_index(site: &SiteDocs) -> String {
    let mut index = String::from("# Libraries\n\n");
    for page in &site.libraries {
        let segments: Vec<&str> = page.path.split('/').collect();
        if let [library, "index"] = segments.as_slice() {
            write!(index, "- [{}](/libraries/{library}/)", page.title).unwrap();
            if let Some(desc) = page.desc.as_deref().filter(|d| !d.is_empty()) {
                write!(index, " - {desc}").unwrap();
            }
            index.push('\n');
        }
    }
    index
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", path.display(), e))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", path.display(), e))
}
