//! Domain Ports
//!
//! Interfaces other subsystems depend on instead of concrete types.

/// Admin link registration port
pub mod admin_index;

pub use admin_index::AdminLinkRegistry;
