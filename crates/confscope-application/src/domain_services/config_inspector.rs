//! Config inspector
//!
//! Holds the effective and default configuration objects of a service and
//! renders one of three views of them as YAML.

use std::sync::Arc;

use confscope_domain::error::Result;
use confscope_domain::{ConfigMapping, ConfigMode};
use serde::Serialize;
use tracing::debug;

use super::config_diff::diff_config;
use super::lowering::{lower_document, mapping_to_yaml};
use crate::ports::ConfigDocument;

/// Renders the full, default or diff view of a service configuration
#[derive(Clone)]
pub struct ConfigInspector {
    actual: Arc<dyn ConfigDocument>,
    defaults: Arc<dyn ConfigDocument>,
}

impl ConfigInspector {
    /// Create an inspector over already type-erased documents
    pub fn new(actual: Arc<dyn ConfigDocument>, defaults: Arc<dyn ConfigDocument>) -> Self {
        Self { actual, defaults }
    }

    /// Create an inspector from two serializable configuration values
    ///
    /// The two values need not share a type.
    pub fn from_configs<A, D>(actual: A, defaults: D) -> Self
    where
        A: Serialize + Send + Sync + 'static,
        D: Serialize + Send + Sync + 'static,
    {
        Self::new(Arc::new(actual), Arc::new(defaults))
    }

    /// Structural diff of the actual config against the defaults
    pub fn diff(&self) -> Result<ConfigMapping> {
        let defaults = lower_document(self.defaults.as_ref())?;
        let actual = lower_document(self.actual.as_ref())?;
        diff_config(&defaults, &actual)
    }

    /// Render the view selected by `mode` as YAML text
    ///
    /// Full and defaults views are the marshaled objects, unmodified. The
    /// diff view is either complete or an error; there is no partial output.
    pub fn render(&self, mode: ConfigMode) -> Result<String> {
        debug!(mode = %mode, "Rendering config view");
        match mode {
            ConfigMode::Full => self.actual.to_yaml_string(),
            ConfigMode::Defaults => self.defaults.to_yaml_string(),
            ConfigMode::Diff => mapping_to_yaml(&self.diff()?),
        }
    }
}

impl std::fmt::Debug for ConfigInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigInspector").finish_non_exhaustive()
    }
}
