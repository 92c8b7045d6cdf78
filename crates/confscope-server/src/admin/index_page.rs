//! Admin index page
//!
//! Renders a registry snapshot as an HTML page, one list per section. Each
//! link's href is the registered path joined onto the server's path prefix.

use confscope_application::IndexPageContent;
use confscope_domain::error::{Error, Result};
use serde::Serialize;
use tera::{Context, Tera};

use crate::constants::DEFAULT_INDEX_TITLE;

// Embedded so the binary is self-contained
const INDEX_HTML: &str = include_str!("templates/index.html");
const INDEX_TEMPLATE_NAME: &str = "index.html";

#[derive(Serialize)]
struct SectionView {
    name: String,
    links: Vec<LinkView>,
}

#[derive(Serialize)]
struct LinkView {
    href: String,
    description: String,
}

/// Renders the admin index page
#[derive(Debug)]
pub struct IndexPageRenderer {
    templates: Tera,
    path_prefix: String,
    title: String,
}

impl IndexPageRenderer {
    /// Create a renderer with the default page title
    pub fn new(path_prefix: impl Into<String>) -> Result<Self> {
        Self::with_title(path_prefix, DEFAULT_INDEX_TITLE)
    }

    /// Create a renderer with a custom page title
    pub fn with_title(path_prefix: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        let mut templates = Tera::default();
        templates
            .add_raw_template(INDEX_TEMPLATE_NAME, INDEX_HTML)
            .map_err(|e| Error::template_with_source("Failed to register index template", e))?;

        Ok(Self {
            templates,
            path_prefix: path_prefix.into(),
            title: title.into(),
        })
    }

    /// Path prefix applied to every link
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Render a registry snapshot
    pub fn render(&self, content: &IndexPageContent) -> Result<String> {
        let sections: Vec<SectionView> = content
            .iter()
            .map(|(name, links)| SectionView {
                name: name.clone(),
                links: links
                    .iter()
                    .map(|(path, description)| LinkView {
                        href: join_path(&self.path_prefix, path),
                        description: description.clone(),
                    })
                    .collect(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("sections", &sections);

        self.templates
            .render(INDEX_TEMPLATE_NAME, &context)
            .map_err(|e| Error::template_with_source("Failed to render index page", e))
    }
}

/// Join a path prefix and a link with slash-path semantics
///
/// Empty elements are ignored, repeated slashes collapse, and `.` and `..`
/// segments are resolved. A query string is split off first and appended
/// unchanged.
///
/// ```
/// use confscope_server::admin::join_path;
///
/// assert_eq!(join_path("/api", "/config"), "/api/config");
/// assert_eq!(join_path("", "/config?mode=diff"), "/config?mode=diff");
/// assert_eq!(join_path("/api/", "../runtime_config"), "/runtime_config");
/// assert_eq!(join_path("/api", "/x?a=b/../c"), "/api/x?a=b/../c");
/// ```
pub fn join_path(prefix: &str, link: &str) -> String {
    let joined = match (prefix.is_empty(), link.is_empty()) {
        (true, true) => return String::new(),
        (true, false) => link.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}/{link}"),
    };
    match joined.split_once('?') {
        Some(("", _)) => joined,
        Some((path, query)) => format!("{}?{query}", clean_path(path)),
        None => clean_path(&joined),
    }
}

fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
