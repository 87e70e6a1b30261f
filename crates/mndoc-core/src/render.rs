//! Markdown rendering for function, class, and library pages.
//!
//! Pages are built as plain strings. Signatures are emitted inside a
//! `::: raw` container wrapping a `<Codeblock>` component so the type
//! names inside can carry real anchors.

use std::fmt::Write;

use crate::links::TypeLinks;
use crate::model::{ClassDoc, FunctionDoc, LibraryDoc};

/// Return type marker meaning "nothing useful to show".
const UNKNOWN_RETURN: &str = "Unknown";

/// Placeholder shown wherever a description is missing.
const NO_DESCRIPTION: &str = "*No description available*";

/// How the function name inside a signature is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Bare name, used on the function's own detail page.
    Plain,
    /// Name links to `/libraries/{parent}/{name}`, used on library
    /// overview listings.
    LibraryLink,
    /// Name links beneath the class overview page, used on class
    /// overview listings. Falls back to the library-style path when the
    /// class is not in the type table.
    ClassLink,
}

/// Renders document entries into markdown page bodies.
pub struct MarkdownRenderer<'a> {
    types: &'a TypeLinks,
}

impl<'a> MarkdownRenderer<'a> {
    #[must_use]
    pub fn new(types: &'a TypeLinks) -> Self {
        Self { types }
    }

    /// Render a one-line signature: `returntype parent.name(args)`.
    ///
    /// Return type and argument types are hyperlinked when they resolve,
    /// with the raw name (array suffix included) as the link text. The
    /// parent prefix is only emitted when a parent is given, so events
    /// render as bare `Name(...)`.
    #[must_use]
    pub fn signature(
        &self,
        function: &FunctionDoc,
        parent: Option<&str>,
        style: NameStyle,
    ) -> String {
        let mut sig = String::new();

        if let Some(return_type) = usable_return_type(function) {
            if let Some(url) = self.types.resolve(return_type) {
                write!(sig, "<a href=\"{url}\">{return_type}</a> ").unwrap();
            } else {
                write!(sig, "{return_type} ").unwrap();
            }
        }

        if let Some(parent) = parent {
            write!(sig, "{parent}.").unwrap();
        }

        if style == NameStyle::Plain {
            sig.push_str(&function.name);
        } else {
            let link = self.listing_link(&function.name, parent.unwrap_or_default(), style);
            write!(sig, "<a href=\"{link}\">{}</a>", function.name).unwrap();
        }

        sig.push('(');
        for (i, arg) in function.args.iter().enumerate() {
            if i > 0 {
                sig.push_str(", ");
            }
            if let Some(url) = self.types.resolve(arg) {
                write!(sig, "<a href=\"{url}\">{arg}</a>").unwrap();
            } else {
                sig.push_str(arg);
            }
        }
        sig.push_str(")\n");

        sig
    }

    /// Render the detail page body for a function or event.
    #[must_use]
    pub fn function_page(&self, function: &FunctionDoc, parent: Option<&str>) -> String {
        let mut page = String::new();
        self.write_signature_block(&mut page, function, parent, NameStyle::Plain);

        writeln!(
            page,
            "## Description\n{}",
            function.desc.as_deref().unwrap_or(NO_DESCRIPTION)
        )
        .unwrap();

        if !function.args.is_empty() {
            page.push_str("## Arguments\n");
            for (i, arg) in function.args.iter().enumerate() {
                if let Some(url) = self.types.resolve(arg) {
                    write!(page, "[{arg}]({url})").unwrap();
                } else {
                    page.push_str(arg);
                }
                if let Some(desc) = arg_desc(function, i) {
                    write!(page, " - {desc}").unwrap();
                }
                page.push_str("  \n");
            }
        }

        if let Some(return_type) = usable_return_type(function) {
            page.push_str("## Returns\n");
            if let Some(url) = self.types.resolve(return_type) {
                write!(page, "[{return_type}]({url})").unwrap();
            } else {
                page.push_str(return_type);
            }
            if let Some(desc) = non_empty(&function.return_desc) {
                write!(page, " - {desc}").unwrap();
            }
            page.push('\n');
        }

        if let Some(example) = non_empty(&function.example) {
            write!(page, "### Example\n```msc\n{example}\n```").unwrap();
        }

        page
    }

    /// Render the overview page body for a class.
    ///
    /// The `## Functions` heading is always present, even for a class
    /// with no methods.
    #[must_use]
    pub fn class_page(&self, class: &ClassDoc) -> String {
        let mut page = String::new();
        writeln!(
            page,
            "# {} <Badge type=\"info\" text=\"class\" />",
            class.name
        )
        .unwrap();
        writeln!(page, "{}", class.desc.as_deref().unwrap_or(NO_DESCRIPTION)).unwrap();

        page.push_str("## Functions\n");
        for function in &class.functions {
            self.write_signature_block(&mut page, function, Some(&class.name), NameStyle::ClassLink);
            writeln!(
                page,
                "- {}  ",
                function.desc.as_deref().unwrap_or(NO_DESCRIPTION)
            )
            .unwrap();
        }

        page
    }

    /// Render the overview page body for a library: class listing first,
    /// then function listing, each section omitted when empty.
    #[must_use]
    pub fn library_page(&self, library: &LibraryDoc) -> String {
        let mut page = String::new();
        writeln!(
            page,
            "# {} <Badge type=\"info\" text=\"library\" />",
            library.name
        )
        .unwrap();
        writeln!(
            page,
            "{}",
            library.desc.as_deref().unwrap_or(NO_DESCRIPTION)
        )
        .unwrap();

        if !library.classes.is_empty() {
            page.push_str("## Classes\n");
            for class in &library.classes {
                write!(
                    page,
                    "- [{}](/libraries/{}/{}/)",
                    class.name, library.name, class.name
                )
                .unwrap();
                if let Some(desc) = non_empty(&class.desc) {
                    write!(page, " - {desc}").unwrap();
                }
                page.push('\n');
            }
        }

        if !library.functions.is_empty() {
            page.push_str("## Functions\n");
            for function in &library.functions {
                self.write_signature_block(
                    &mut page,
                    function,
                    Some(&library.name),
                    NameStyle::LibraryLink,
                );
                writeln!(
                    page,
                    "- {}  ",
                    function.desc.as_deref().unwrap_or(NO_DESCRIPTION)
                )
                .unwrap();
            }
        }

        page
    }

    fn write_signature_block(
        &self,
        page: &mut String,
        function: &FunctionDoc,
        parent: Option<&str>,
        style: NameStyle,
    ) {
        let sig = self.signature(function, parent, style);
        write!(page, "::: raw\n<Codeblock>{sig}</Codeblock>\n:::\n").unwrap();
    }

    fn listing_link(&self, name: &str, parent: &str, style: NameStyle) -> String {
        if style == NameStyle::ClassLink {
            if let Some(class_url) = self.types.get(parent) {
                return format!("{class_url}{name}");
            }
        }
        format!("/libraries/{parent}/{name}")
    }
}

fn usable_return_type(function: &FunctionDoc) -> Option<&str> {
    function
        .return_type
        .as_deref()
        .filter(|rt| !rt.is_empty() && *rt != UNKNOWN_RETURN)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn arg_desc(function: &FunctionDoc, index: usize) -> Option<&str> {
    function
        .args_desc
        .as_ref()
        .and_then(|descs| descs.get(index))
        .map(String::as_str)
        .filter(|desc| !desc.is_empty())
}
