//! Admin index registry
//!
//! Section → (path → description) map shared by every subsystem that wants
//! its endpoints on the admin index page. One instance is created at startup
//! and handed out as `Arc<AdminIndex>` or `Arc<dyn AdminLinkRegistry>`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use confscope_domain::ports::AdminLinkRegistry;
use tracing::debug;

/// Section name → (path → description)
pub type IndexPageContent = BTreeMap<String, BTreeMap<String, String>>;

/// Mutex-guarded admin link registry
///
/// Both operations hold the lock only for the in-memory insert or copy.
#[derive(Debug, Default)]
pub struct AdminIndex {
    content: Mutex<IndexPageContent>,
}

impl AdminIndex {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a link; the last description for a (section, path) wins
    pub fn add_link(&self, section: &str, path: &str, description: &str) {
        {
            let mut content = self.lock();
            content
                .entry(section.to_string())
                .or_default()
                .insert(path.to_string(), description.to_string());
        }
        debug!(section, path, "Registered admin link");
    }

    /// Independent copy of the registered links, ordered by section and path
    pub fn snapshot(&self) -> IndexPageContent {
        self.lock().clone()
    }

    /// Total number of registered links
    pub fn len(&self) -> usize {
        self.lock().values().map(BTreeMap::len).sum()
    }

    /// Whether no link has been registered
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic elsewhere cannot leave the map half-written: each critical
    // section is a single insert or clone.
    fn lock(&self) -> MutexGuard<'_, IndexPageContent> {
        self.content.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AdminLinkRegistry for AdminIndex {
    fn add_link(&self, section: &str, path: &str, description: &str) {
        AdminIndex::add_link(self, section, path, description);
    }
}
