//! Application Ports
//!
//! Collaborator interfaces consumed by the config inspector and the admin
//! server.

/// Serializer collaborator
pub mod config_document;
/// Runtime configuration source
pub mod runtime_config;

pub use config_document::ConfigDocument;
pub use runtime_config::RuntimeConfigSource;
