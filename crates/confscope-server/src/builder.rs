//! Admin server builder
//!
//! Assembles [`AdminState`] from its collaborators and registers the
//! built-in admin links.

use std::sync::Arc;

use confscope_application::{AdminIndex, ConfigInspector, RuntimeConfigSource};
use confscope_domain::constants::SECTION_ADMIN_ENDPOINTS;
use confscope_domain::ports::AdminLinkRegistry;
use confscope_domain::AdminLink;

use crate::admin::{AdminState, IndexPageRenderer};
use crate::constants::{BUILTIN_ADMIN_LINKS, DEFAULT_INDEX_TITLE};

/// Builder for the admin server state
///
/// Only the config inspector is required. Without an explicit registry a
/// fresh one is created; pass a shared one with [`Self::with_index`] so other
/// subsystems can keep registering links after the server is built.
pub struct AdminServerBuilder {
    index: Option<Arc<AdminIndex>>,
    inspector: Option<ConfigInspector>,
    runtime_config: Option<Arc<dyn RuntimeConfigSource>>,
    path_prefix: String,
    title: String,
}

impl Default for AdminServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminServerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            index: None,
            inspector: None,
            runtime_config: None,
            path_prefix: String::new(),
            title: DEFAULT_INDEX_TITLE.to_string(),
        }
    }

    /// Use a shared admin link registry
    pub fn with_index(mut self, index: Arc<AdminIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the config inspector
    pub fn with_config_inspector(mut self, inspector: ConfigInspector) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Set the runtime config source
    pub fn with_runtime_config(mut self, source: Arc<dyn RuntimeConfigSource>) -> Self {
        self.runtime_config = Some(source);
        self
    }

    /// Set the path prefix applied to index links and routes
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Set the index page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the admin state
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if no config inspector was
    /// provided, or `BuilderError::Renderer` if the index template fails to
    /// load.
    pub fn build(self) -> Result<AdminState, BuilderError> {
        let inspector = self
            .inspector
            .ok_or(BuilderError::MissingDependency("config inspector"))?;
        let renderer = IndexPageRenderer::with_title(self.path_prefix, self.title)?;
        let index = self.index.unwrap_or_default();

        for link in builtin_links() {
            index.register(&link);
        }

        Ok(AdminState {
            index,
            inspector,
            runtime_config: self.runtime_config,
            renderer: Arc::new(renderer),
        })
    }
}

/// The config views served by every admin server
pub fn builtin_links() -> impl Iterator<Item = AdminLink> {
    BUILTIN_ADMIN_LINKS
        .into_iter()
        .map(|(path, description)| AdminLink::new(SECTION_ADMIN_ENDPOINTS, path, description))
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),

    /// The index page renderer could not be created
    #[error(transparent)]
    Renderer(#[from] confscope_domain::Error),
}
