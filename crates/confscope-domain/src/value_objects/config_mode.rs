//! Config inspection mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{CONFIG_MODE_DEFAULTS, CONFIG_MODE_DIFF};

/// Which view of the configuration a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMode {
    /// The effective configuration, unmodified
    #[default]
    Full,
    /// The built-in defaults, unmodified
    Defaults,
    /// Only the values that differ from the defaults
    Diff,
}

impl ConfigMode {
    /// Map a `mode` query parameter to a mode
    ///
    /// Missing, empty and unrecognized values all select [`ConfigMode::Full`].
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(CONFIG_MODE_DIFF) => Self::Diff,
            Some(CONFIG_MODE_DEFAULTS) => Self::Defaults,
            _ => Self::Full,
        }
    }

    /// Query parameter value for this mode (`""` for full)
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Full => "",
            Self::Defaults => CONFIG_MODE_DEFAULTS,
            Self::Diff => CONFIG_MODE_DIFF,
        }
    }
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            other => f.write_str(other.as_param()),
        }
    }
}

/// Strict parsing, used for command line arguments
impl FromStr for ConfigMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "full" => Ok(Self::Full),
            CONFIG_MODE_DEFAULTS => Ok(Self::Defaults),
            CONFIG_MODE_DIFF => Ok(Self::Diff),
            other => Err(format!(
                "Unknown config mode: {other}. Use full, diff or defaults"
            )),
        }
    }
}
