//! File-backed runtime configuration
//!
//! Holds the last successfully parsed runtime overrides document. Readers get
//! an `Arc` to the current document and never block a reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use confscope_application::ports::{ConfigDocument, RuntimeConfigSource};
use confscope_domain::error::Result;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::config::RuntimeConfigSettings;
use crate::error_ext::ErrorContext;

/// Runtime overrides loaded from an optional YAML file
#[derive(Debug)]
pub struct RuntimeConfigManager {
    path: Option<PathBuf>,
    current: ArcSwapOption<Value>,
}

impl RuntimeConfigManager {
    /// Manager with nothing loaded yet
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            current: ArcSwapOption::empty(),
        }
    }

    /// Manager that never has a runtime config
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Create a manager and load the file once
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let manager = Self::new(path);
        manager.reload()?;
        Ok(manager)
    }

    /// Create a manager from the `runtime_config` section and load it
    pub fn from_settings(settings: &RuntimeConfigSettings) -> Result<Self> {
        Self::load(settings.file.clone())
    }

    /// Re-read the file
    ///
    /// Returns whether a document is loaded afterwards. A missing file clears
    /// the current document. A malformed file is an error and leaves the
    /// current document untouched.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = &self.path else {
            self.current.store(None);
            return Ok(false);
        };

        if !path.exists() {
            debug!(path = %path.display(), "Runtime config file not present");
            self.current.store(None);
            return Ok(false);
        }

        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read runtime config: {}", path.display()))?;
        let document = parse_document(&content, path)?;

        self.current.store(Some(Arc::new(document)));
        info!(path = %path.display(), "Runtime config loaded");
        Ok(true)
    }

    /// Current document, if one is loaded
    pub fn get(&self) -> Option<Arc<Value>> {
        self.current.load_full()
    }

    /// Configured file path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl RuntimeConfigSource for RuntimeConfigManager {
    fn runtime_config(&self) -> Option<Arc<dyn ConfigDocument>> {
        self.get().map(|value| value as Arc<dyn ConfigDocument>)
    }
}

// An empty file is a present but empty document.
fn parse_document(content: &str, path: &Path) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(serde_yaml::Mapping::new()));
    }
    serde_yaml::from_str(content)
        .config_context(format!("Malformed runtime config: {}", path.display()))
}
