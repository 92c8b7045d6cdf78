//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ConfigValue`] | Node of a lowered, format-agnostic configuration tree |
//! | [`ConfigMode`] | Which configuration view a request selects |
//! | [`AdminLink`] | Registered admin endpoint (section, path, description) |

/// Admin index link
pub mod admin_link;
/// Config inspection mode
pub mod config_mode;
/// Generic configuration tree
pub mod config_value;

pub use admin_link::AdminLink;
pub use config_mode::ConfigMode;
pub use config_value::{ConfigMapping, ConfigValue};
