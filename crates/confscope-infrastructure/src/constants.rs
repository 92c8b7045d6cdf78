//! Infrastructure layer constants
//!
//! Domain-level labels live in `confscope_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "confscope.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "confscope";

/// Environment variable prefix for configuration (`CONFSCOPE__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "CONFSCOPE__";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default admin server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default admin server port
pub const DEFAULT_HTTP_PORT: u16 = 9009;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CONFSCOPE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "confscope";
