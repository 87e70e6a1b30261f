//! Navigation sidebar built from emitted page paths.
//!
//! The builder never looks at page content. It takes the list of paths
//! the site writer produced and folds them into a two-branch tree:
//! "Libraries" (library -> Classes/Functions) and "Events".

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::compare_names;

/// One node of the navigation tree.
///
/// Serialization skips absent links, unset collapsed flags, and empty
/// child lists, so leaves come out as bare `{text, link}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub collapsed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// Leaf entry pointing at a single page.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsed: false,
            items: Vec::new(),
        }
    }

    /// Collapsed group with a landing page link. Group links carry a
    /// trailing slash so the site serves the directory index directly.
    fn group(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsed: true,
            items: Vec::new(),
        }
    }

    /// Collapsed grouping header without a link of its own.
    fn section(text: &str, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.to_string(),
            link: None,
            collapsed: true,
            items,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(collapsed: &bool) -> bool {
    !collapsed
}

/// Build the sidebar tree from the paths of every written page.
///
/// Paths are relative to the output root, slash separated, without
/// extension: `libraries/{lib}/{fn}`, `libraries/{lib}/{class}/{method}`,
/// `events/{name}`. Any path ending in `index` is skipped; overview
/// pages are reachable through their group's own link instead. Paths
/// outside the two known namespaces are ignored.
///
/// A method path creates its library node even when the library has no
/// top-level functions. Libraries and classes are ordered with
/// [`compare_names`]; function and event leaves keep the order the
/// paths were given in, which for a normalized document is already
/// sorted.
#[must_use]
pub fn build_sidebar<S: AsRef<str>>(paths: &[S]) -> SidebarItem {
    let mut library_functions: BTreeMap<String, Vec<SidebarItem>> = BTreeMap::new();
    let mut library_classes: BTreeMap<String, BTreeMap<String, Vec<SidebarItem>>> = BTreeMap::new();
    let mut events = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let segments: Vec<&str> = path.split('/').collect();
        if segments.last() == Some(&"index") {
            continue;
        }

        match segments.as_slice() {
            ["libraries", library, function] => {
                library_functions
                    .entry((*library).to_string())
                    .or_default()
                    .push(SidebarItem::leaf(*function, path));
            }
            ["libraries", library, class, method] => {
                // The method page implies its library node.
                library_functions.entry((*library).to_string()).or_default();
                library_classes
                    .entry((*library).to_string())
                    .or_default()
                    .entry((*class).to_string())
                    .or_default()
                    .push(SidebarItem::leaf(*method, path));
            }
            ["events", event] => events.push(SidebarItem::leaf(*event, path)),
            _ => {}
        }
    }

    let mut library_nodes = Vec::new();
    for (library, functions) in library_functions {
        let mut classes: Vec<SidebarItem> = library_classes
            .remove(&library)
            .unwrap_or_default()
            .into_iter()
            .map(|(class, methods)| {
                let link = format!("/libraries/{library}/{class}/");
                let mut node = SidebarItem::group(class, link);
                node.items = methods;
                node
            })
            .collect();
        classes.sort_by(|a, b| compare_names(&a.text, &b.text));

        let link = format!("/libraries/{library}/");
        let mut node = SidebarItem::group(library, link);
        if !classes.is_empty() {
            node.items.push(SidebarItem::section("Classes", classes));
        }
        if !functions.is_empty() {
            node.items.push(SidebarItem::section("Functions", functions));
        }
        library_nodes.push(node);
    }
    library_nodes.sort_by(|a, b| compare_names(&a.text, &b.text));

    let mut libraries_branch = SidebarItem::group("Libraries", "/libraries/");
    libraries_branch.items = library_nodes;
    let mut events_branch = SidebarItem::group("Events", "/events/");
    events_branch.items = events;

    SidebarItem {
        text: "Reference".to_string(),
        link: None,
        collapsed: false,
        items: vec![libraries_branch, events_branch],
    }
}
