//! Runtime configuration source port

use std::sync::Arc;

use super::ConfigDocument;

/// Provider of the currently loaded runtime configuration
///
/// Returns `None` when no runtime configuration exists. That is a normal
/// state, not an error.
pub trait RuntimeConfigSource: Send + Sync {
    /// Current runtime configuration document, if any
    fn runtime_config(&self) -> Option<Arc<dyn ConfigDocument>>;
}
