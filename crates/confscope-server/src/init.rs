//! Server initialization
//!
//! Loads configuration, initializes logging, wires the admin state and
//! launches the admin server.

use std::path::Path;
use std::sync::Arc;

use confscope_application::ConfigInspector;
use confscope_domain::ConfigMode;
use confscope_infrastructure::config::{AppConfig, ConfigLoader};
use confscope_infrastructure::logging::init_logging;
use confscope_infrastructure::RuntimeConfigManager;
use tracing::info;

use crate::admin::{AdminApi, AdminApiConfig, AdminState};
use crate::builder::AdminServerBuilder;

/// Run the admin server
///
/// Returns once Rocket shuts down (Ctrl+C or SIGTERM).
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        path_prefix = %config.server.path_prefix,
        "Starting confscope admin server"
    );

    let state = build_admin_state(&config)?;
    info!(links = state.index.len(), "Admin state initialized");

    AdminApi::new(AdminApiConfig::from(&config.server), state)
        .start()
        .await?;
    Ok(())
}

/// Render one config view of the loaded configuration
///
/// Used by `confscope --dump`; logging is not initialized so stdout carries
/// only the document.
pub fn dump_config(
    config_path: Option<&Path>,
    mode: ConfigMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    Ok(inspector_for(&config).render(mode)?)
}

/// Wire the admin state for a loaded configuration
///
/// The service's own configuration is the actual document and
/// `AppConfig::default()` the defaults.
pub fn build_admin_state(config: &AppConfig) -> Result<AdminState, Box<dyn std::error::Error>> {
    let runtime_config = RuntimeConfigManager::from_settings(&config.runtime_config)?;

    let state = AdminServerBuilder::new()
        .with_config_inspector(inspector_for(config))
        .with_runtime_config(Arc::new(runtime_config))
        .with_path_prefix(config.server.path_prefix.clone())
        .build()?;
    Ok(state)
}

fn inspector_for(config: &AppConfig) -> ConfigInspector {
    ConfigInspector::from_configs(config.clone(), AppConfig::default())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
