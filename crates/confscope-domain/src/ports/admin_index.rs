//! Admin link registration port

use crate::value_objects::AdminLink;

/// Sink for admin index links
///
/// Handed to every subsystem that wants its endpoints listed on the admin
/// index page. Registration never fails and may happen at any time during
/// the process lifetime.
///
/// # Example
///
/// ```no_run
/// use confscope_domain::constants::SECTION_DANGEROUS;
/// use confscope_domain::ports::AdminLinkRegistry;
/// use std::sync::Arc;
///
/// fn register_purger(links: Arc<dyn AdminLinkRegistry>) {
///     links.add_link(SECTION_DANGEROUS, "/purger/delete", "Delete series");
/// }
/// ```
pub trait AdminLinkRegistry: Send + Sync {
    /// Register a link, replacing any earlier description for the same
    /// section and path
    fn add_link(&self, section: &str, path: &str, description: &str);

    /// Register a prepared link
    fn register(&self, link: &AdminLink) {
        self.add_link(&link.section, &link.path, &link.description);
    }
}
