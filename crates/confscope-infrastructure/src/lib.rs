//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for confscope.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Typed `AppConfig`, Figment loader (TOML + env) |
//! | [`runtime_config`] | File-backed runtime overrides document |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod runtime_config;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use runtime_config::RuntimeConfigManager;
