//! Type-name to URL lookup table.
//!
//! Every cross-reference in the rendered pages resolves through this
//! table. Primitives point at the syntax fundamentals page; every class
//! points at its overview page. Duplicate class names across libraries
//! keep the last entry written, so after normalization the class in the
//! alphabetically last library wins.

use std::collections::HashMap;

use crate::model::Docs;

/// Anchor page documenting the primitive types.
const PRIMITIVES_URL: &str = "/fundamentals/syntax#primitives";

/// Lookup table from type name to site-relative URL.
#[derive(Debug, Clone, Default)]
pub struct TypeLinks {
    links: HashMap<String, String>,
}

impl TypeLinks {
    /// Build the table for a document: primitives first, then one entry
    /// per class, keyed by bare class name.
    #[must_use]
    pub fn build(docs: &Docs) -> Self {
        let mut links = HashMap::new();
        for primitive in ["number", "string", "bool"] {
            links.insert(primitive.to_string(), PRIMITIVES_URL.to_string());
        }

        for library in &docs.libraries {
            for class in &library.classes {
                links.insert(
                    class.name.clone(),
                    format!("/libraries/{}/{}/", library.name, class.name),
                );
            }
        }

        Self { links }
    }

    /// Resolve a type name to its page URL. A trailing `[]` is stripped
    /// before the probe, so array types resolve to their element type.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let base = name.strip_suffix("[]").unwrap_or(name);
        self.links.get(base).map(String::as_str)
    }

    /// Look up a URL by exact name, without array handling.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDoc, LibraryDoc};

    fn class(name: &str) -> ClassDoc {
        ClassDoc {
            name: name.to_string(),
            desc: None,
            functions: Vec::new(),
        }
    }

    fn library(name: &str, classes: Vec<ClassDoc>) -> LibraryDoc {
        LibraryDoc {
            name: name.to_string(),
            desc: None,
            functions: Vec::new(),
            classes,
        }
    }

    #[test]
    fn test_primitives_seeded() {
        let links = TypeLinks::build(&Docs::default());
        assert_eq!(links.resolve("number"), Some(PRIMITIVES_URL));
        assert_eq!(links.resolve("string"), Some(PRIMITIVES_URL));
        assert_eq!(links.resolve("bool"), Some(PRIMITIVES_URL));
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_class_entry_points_at_overview() {
        let docs = Docs {
            events: Vec::new(),
            libraries: vec![library("Http", vec![class("HttpResponse")])],
        };

        let links = TypeLinks::build(&docs);
        assert_eq!(
            links.resolve("HttpResponse"),
            Some("/libraries/Http/HttpResponse/")
        );
    }

    #[test]
    fn test_array_suffix_resolves_to_element_type() {
        let docs = Docs {
            events: Vec::new(),
            libraries: vec![library("Http", vec![class("HttpHeader")])],
        };

        let links = TypeLinks::build(&docs);
        assert_eq!(
            links.resolve("HttpHeader[]"),
            Some("/libraries/Http/HttpHeader/")
        );
        assert_eq!(links.resolve("number[]"), Some(PRIMITIVES_URL));
        // Exact lookup leaves the suffix alone.
        assert_eq!(links.get("HttpHeader[]"), None);
    }

    #[test]
    fn test_unknown_type_is_none() {
        let links = TypeLinks::build(&Docs::default());
        assert_eq!(links.resolve("Vector"), None);
    }

    #[test]
    fn test_duplicate_class_last_write_wins() {
        // Both libraries define a Response class; iteration order decides
        // which one the table keeps.
        let mut docs = Docs {
            events: Vec::new(),
            libraries: vec![
                library("Web", vec![class("Response")]),
                library("Http", vec![class("Response")]),
            ],
        };
        docs.normalize();

        let links = TypeLinks::build(&docs);
        assert_eq!(links.resolve("Response"), Some("/libraries/Web/Response/"));
        // One entry only, despite two classes with the name.
        assert_eq!(links.len(), 4);
    }
}
