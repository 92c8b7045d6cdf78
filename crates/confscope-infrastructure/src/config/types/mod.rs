//! Configuration types
//!
//! One module per section of `confscope.toml`.

pub mod app;
pub mod logging;
pub mod runtime;
pub mod server;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use runtime::RuntimeConfigSettings;
pub use server::ServerConfig;
