//! Runtime overrides configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the runtime overrides file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfigSettings {
    /// YAML file with runtime overrides; unset means no runtime config
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
