//! Admin API server
//!
//! Binds the admin routes to the configured address and launches Rocket.

use confscope_domain::error::{Error, Result};
use confscope_infrastructure::config::ServerConfig;
use confscope_infrastructure::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST};
use rocket::config::{Config as RocketConfig, LogLevel};
use std::net::{IpAddr, Ipv4Addr};
use tracing::{info, warn};

use super::handlers::AdminState;
use super::routes::admin_rocket;

/// Admin API server configuration
#[derive(Debug, Clone)]
pub struct AdminApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl From<&ServerConfig> for AdminApiConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

impl AdminApiConfig {
    /// Get the Rocket configuration
    ///
    /// A host that is not an IP address falls back to loopback.
    pub fn rocket_config(&self) -> RocketConfig {
        let address: IpAddr = self.host.parse().unwrap_or_else(|_| {
            warn!(host = %self.host, "Invalid admin host, binding to loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        });
        RocketConfig {
            address,
            port: self.port,
            log_level: LogLevel::Critical,
            ..RocketConfig::default()
        }
    }
}

/// Admin API server
#[derive(Debug)]
pub struct AdminApi {
    config: AdminApiConfig,
    state: AdminState,
}

impl AdminApi {
    /// Create a new admin API server
    pub fn new(config: AdminApiConfig, state: AdminState) -> Self {
        Self { config, state }
    }

    /// Start the admin API server and run until Rocket shuts down
    pub async fn start(self) -> Result<()> {
        let rocket_config = self.config.rocket_config();

        info!(
            "Admin API server listening on {}:{}",
            rocket_config.address, rocket_config.port
        );

        admin_rocket(self.state)
            .configure(rocket_config)
            .launch()
            .await
            .map_err(|e| Error::io(format!("Rocket launch failed: {e}")))?;

        Ok(())
    }
}
