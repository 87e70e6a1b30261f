//! Mndoc Core - Generation engine for the MNScript documentation site
//!
//! This crate turns the published MNScript docs feed into site content:
//!
//! - Model: Typed view of the JSON docs feed
//! - Source: Remote fetch or local snapshot of the feed
//! - Links: Type name to page URL lookup table
//! - Render: Markdown bodies for event, function, class, and library pages
//! - Site: Full page set with paths, titles, and search keys
//! - Sidebar: Navigation tree built from emitted page paths

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build configuration file name
pub const CONFIG_FILE: &str = "mndoc.toml";

/// Build configuration loaded from `mndoc.toml`
pub mod config;
/// Type name to URL lookup table
pub mod links;
/// Docs feed data model and normalization
pub mod model;
/// Markdown page rendering
pub mod render;
/// Navigation sidebar construction
pub mod sidebar;
/// Site assembly
pub mod site;
/// Docs feed input
pub mod source;

/// Convenience re-export of the build configuration
pub use config::BuildConfig;
/// Convenience re-export of the type link table
pub use links::TypeLinks;
/// Convenience re-export of the docs document
pub use model::Docs;
/// Convenience re-export of the sidebar builder
pub use sidebar::{build_sidebar, SidebarItem};
/// Convenience re-export of the rendered site
pub use site::{Page, SiteDocs};
/// Convenience re-export of the docs feed source
pub use source::{fetch_snapshot, DocsError, DocsSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_feed_to_site_pipeline() {
        let mut docs: Docs = serde_json::from_str(
            r#"{
                "events": [{"name": "PlayerJoin", "desc": "Fired on join.", "args": []}],
                "libraries": [{
                    "name": "Http",
                    "desc": "HTTP requests.",
                    "functions": [
                        {"name": "get", "args": ["string"], "returnType": "HttpResponse"}
                    ],
                    "classes": [{
                        "name": "HttpResponse",
                        "functions": [
                            {"name": "body", "args": [], "returnType": "string"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        docs.normalize();

        let site = SiteDocs::generate(&docs);
        assert_eq!(site.events.len(), 1);
        assert_eq!(site.libraries.len(), 4);

        // The function page links its return type to the class overview.
        assert_eq!(site.libraries[0].path, "Http/get");
        assert!(site.libraries[0]
            .content
            .contains("<a href=\"/libraries/Http/HttpResponse/\">HttpResponse</a>"));

        let mut paths: Vec<String> = site
            .events
            .iter()
            .map(|p| format!("events/{}", p.path))
            .collect();
        paths.extend(site.libraries.iter().map(|p| format!("libraries/{}", p.path)));

        let sidebar = build_sidebar(&paths);
        let libraries = &sidebar.items[0];
        assert_eq!(libraries.items.len(), 1);
        assert_eq!(libraries.items[0].text, "Http");
        let sections: Vec<&str> = libraries.items[0]
            .items
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(sections, ["Classes", "Functions"]);

        let events = &sidebar.items[1];
        assert_eq!(events.items[0].text, "PlayerJoin");
    }
}
