//! Site assembly: turns a document into a full set of rendered pages.

use crate::links::TypeLinks;
use crate::model::Docs;
use crate::render::MarkdownRenderer;

/// A rendered markdown page plus its frontmatter fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Short description, absent when the source entry has none.
    pub desc: Option<String>,
    /// Output path relative to the section directory, without extension.
    pub path: String,
    /// Key the search index stores for the page.
    pub search: String,
    /// Rendered markdown body.
    pub content: String,
}

/// Every page of the generated site, split by section, plus the type
/// table the pages were rendered against.
#[derive(Debug, Clone, Default)]
pub struct SiteDocs {
    pub events: Vec<Page>,
    pub libraries: Vec<Page>,
    pub types: TypeLinks,
}

impl SiteDocs {
    /// Render every page for a document. Call [`Docs::normalize`] first
    /// so page order matches navigation order.
    ///
    /// Emission order per library: functions, then each class (methods
    /// followed by its overview), then the library overview. Events
    /// form their own section.
    #[must_use]
    pub fn generate(docs: &Docs) -> Self {
        let types = TypeLinks::build(docs);
        let renderer = MarkdownRenderer::new(&types);

        let mut events = Vec::new();
        for event in &docs.events {
            events.push(Page {
                title: event.name.clone(),
                desc: event.desc.clone(),
                path: event.name.clone(),
                search: event.name.clone(),
                content: renderer.function_page(event, None),
            });
        }

        let mut libraries = Vec::new();
        for library in &docs.libraries {
            for function in &library.functions {
                libraries.push(Page {
                    title: function.name.clone(),
                    desc: function.desc.clone(),
                    path: format!("{}/{}", library.name, function.name),
                    search: format!("{}.{}", library.name, function.name),
                    content: renderer.function_page(function, Some(&library.name)),
                });
            }

            for class in &library.classes {
                for function in &class.functions {
                    libraries.push(Page {
                        title: function.name.clone(),
                        desc: function.desc.clone(),
                        path: format!("{}/{}/{}", library.name, class.name, function.name),
                        search: format!("{}.{}", class.name, function.name),
                        content: renderer.function_page(function, Some(&class.name)),
                    });
                }

                libraries.push(Page {
                    title: class.name.clone(),
                    desc: class.desc.clone(),
                    path: format!("{}/{}/index", library.name, class.name),
                    search: class.name.clone(),
                    content: renderer.class_page(class),
                });
            }

            libraries.push(Page {
                title: library.name.clone(),
                desc: library.desc.clone(),
                path: format!("{}/index", library.name),
                search: library.name.clone(),
                content: renderer.library_page(library),
            });
        }

        Self {
            events,
            libraries,
            types,
        }
    }
}
