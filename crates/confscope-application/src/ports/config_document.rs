//! Serializer collaborator
//!
//! Any `Serialize` value can be inspected. The blanket implementation below
//! is the only one; the trait exists so the inspector can hold type-erased
//! configuration objects of unrelated types.

use confscope_domain::error::{Error, Result};
use serde::Serialize;

/// A configuration object that can be marshaled to a YAML document
pub trait ConfigDocument: Send + Sync {
    /// Marshal the object to YAML text
    fn to_yaml_string(&self) -> Result<String>;
}

impl<T> ConfigDocument for T
where
    T: Serialize + Send + Sync + ?Sized,
{
    fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::serialization_with_source("Failed to marshal config to YAML", e))
    }
}
