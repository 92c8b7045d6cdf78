//! Error extension utilities
//!
//! Turns foreign errors (I/O, figment, TOML, YAML) into domain errors. The
//! foreign error is kept as the source, and its message is appended to the
//! context.

use confscope_domain::error::{Error, Result};
use std::fmt::Display;

/// Extension trait mapping a foreign error into a domain error kind
///
/// # Example
///
/// ```ignore
/// use confscope_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read runtime config: {}", path.display()))?;
///
/// let value: serde_yaml::Value = serde_yaml::from_str(&content)
///     .config_context("Malformed runtime config")?;
/// ```
pub trait ErrorContext<T> {
    /// Map the error to [`Error::Io`]
    fn io_context(self, context: impl Display) -> Result<T>;

    /// Map the error to [`Error::Configuration`]
    fn config_context(self, context: impl Display) -> Result<T>;

    /// Map the error to [`Error::Serialization`]
    fn serialization_context(self, context: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::io_with_source(describe(context, &err), err))
    }

    fn config_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(describe(context, &err), err))
    }

    fn serialization_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::serialization_with_source(describe(context, &err), err))
    }
}

fn describe(context: impl Display, err: &impl Display) -> String {
    format!("{context}: {err}")
}
