//! Admin index link

use serde::{Deserialize, Serialize};

/// One operator-facing endpoint listed on the admin index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLink {
    /// Display grouping label
    pub section: String,
    /// Path relative to the server's path prefix, may carry a query string
    pub path: String,
    /// Human readable description
    pub description: String,
}

impl AdminLink {
    /// Create a new link
    pub fn new(
        section: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            path: path.into(),
            description: description.into(),
        }
    }
}
