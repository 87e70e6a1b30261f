//! Data model for the MNScript docs document.
//!
//! Mirrors the JSON shape published by the MNScript docs feed: a root
//! document holding events and libraries, libraries holding functions and
//! classes, classes holding methods. Field names follow Rust conventions
//! and are mapped onto the feed's camelCase keys with serde renames.

use std::cmp::Ordering;

use serde::Deserialize;

/// A documented function. Also the shape of methods and events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionDoc {
    /// Function name.
    pub name: String,

    /// Description, absent for undocumented functions.
    #[serde(default)]
    pub desc: Option<String>,

    /// Example code snippet.
    #[serde(default)]
    pub example: Option<String>,

    /// Parameter type names, in declaration order.
    #[serde(default)]
    pub args: Vec<String>,

    /// Per-parameter descriptions, indexed like `args`. The feed does not
    /// guarantee the counts match; missing entries are tolerated.
    #[serde(default, rename = "argsDesc")]
    pub args_desc: Option<Vec<String>>,

    /// Return type name. The feed emits `"Unknown"` when it has no
    /// usable type.
    #[serde(default, rename = "returnType")]
    pub return_type: Option<String>,

    /// Return value description.
    #[serde(default, rename = "returnDesc")]
    pub return_desc: Option<String>,
}

/// A class owned by exactly one library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassDoc {
    /// Class name.
    pub name: String,

    /// Description, absent for undocumented classes.
    #[serde(default)]
    pub desc: Option<String>,

    /// Methods.
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,
}

/// A named grouping of top-level functions and classes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryDoc {
    /// Library name.
    pub name: String,

    /// Description, absent for undocumented libraries.
    #[serde(default)]
    pub desc: Option<String>,

    /// Top-level functions.
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,

    /// Classes.
    #[serde(default)]
    pub classes: Vec<ClassDoc>,
}

/// The root document parsed from the docs feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Docs {
    /// Top-level events. Structurally plain functions with no parent.
    #[serde(default)]
    pub events: Vec<FunctionDoc>,

    /// Libraries.
    #[serde(default)]
    pub libraries: Vec<LibraryDoc>,
}

impl Docs {
    /// Sort the whole document alphabetically by name: events, libraries,
    /// each library's classes and functions, and each class's methods.
    /// Idempotent; entries with equal keys keep their original order.
    pub fn normalize(&mut self) {
        self.events.sort_by(|a, b| compare_names(&a.name, &b.name));
        self.libraries.sort_by(|a, b| compare_names(&a.name, &b.name));

        for library in &mut self.libraries {
            library
                .classes
                .sort_by(|a, b| compare_names(&a.name, &b.name));
            for class in &mut library.classes {
                class
                    .functions
                    .sort_by(|a, b| compare_names(&a.name, &b.name));
            }

            library
                .functions
                .sort_by(|a, b| compare_names(&a.name, &b.name));
        }
    }
}

/// Case-insensitive name ordering used by every sort in the document and
/// in the sidebar, so listings and navigation always agree.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
