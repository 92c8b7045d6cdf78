//! Admin server configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Admin HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Prefix prepended to every link on the index page (e.g. `/api`)
    pub path_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            path_prefix: String::new(),
        }
    }
}
