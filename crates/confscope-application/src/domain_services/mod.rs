//! Domain services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`ConfigInspector`] | Full / defaults / diff views of a service configuration |
//! | [`AdminIndex`] | Thread-safe admin link registry |
//! | [`diff_config`] | Structural diff between two lowered configs |

pub mod admin_index;
pub mod config_diff;
pub mod config_inspector;
pub mod lowering;

pub use admin_index::{AdminIndex, IndexPageContent};
pub use config_diff::diff_config;
pub use config_inspector::ConfigInspector;
pub use lowering::{lower_document, lower_str, mapping_to_yaml};
