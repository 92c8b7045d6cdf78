//! Root application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RuntimeConfigSettings, ServerConfig};

/// Main application configuration
///
/// This is also the document exposed by the `/config` admin endpoint, with
/// `AppConfig::default()` as its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Admin HTTP server
    pub server: ServerConfig,

    /// Logging
    pub logging: LoggingConfig,

    /// Runtime overrides file
    pub runtime_config: RuntimeConfigSettings,
}
