//! Structural config diff
//!
//! Walks the actual configuration and keeps only what differs from the
//! defaults. Keys that exist only in the defaults never show up.

use confscope_domain::error::{Error, Result};
use confscope_domain::{ConfigMapping, ConfigValue};

/// Compute the keys of `actual` that differ from `default`
///
/// - keys missing from `default` are copied verbatim
/// - scalars differ when the default has another kind or another value
/// - floats and sequences differ unless deeply equal (floats by bit pattern)
/// - mappings recurse; an equal nested mapping disappears entirely, and a
///   mapping whose default is not a mapping is copied verbatim
///
/// A `null`, `binary` or `tagged` node reached by the comparison aborts the whole
/// diff with [`Error::UnsupportedType`].
pub fn diff_config(default: &ConfigMapping, actual: &ConfigMapping) -> Result<ConfigMapping> {
    diff_mapping(default, actual, "")
}

fn diff_mapping(
    default: &ConfigMapping,
    actual: &ConfigMapping,
    parent: &str,
) -> Result<ConfigMapping> {
    let mut output = ConfigMapping::new();

    for (key, value) in actual {
        let Some(default_value) = default.get(key) else {
            output.insert(key.clone(), value.clone());
            continue;
        };

        let path = key_path(parent, key);
        if let Some(changed) = diff_value(default_value, value, &path)? {
            output.insert(key.clone(), changed);
        }
    }

    Ok(output)
}

fn diff_value(
    default: &ConfigValue,
    actual: &ConfigValue,
    path: &str,
) -> Result<Option<ConfigValue>> {
    let differs = match actual {
        // Equality on ConfigValue already requires the same variant
        ConfigValue::Bool(_) | ConfigValue::Int(_) | ConfigValue::String(_) => default != actual,
        ConfigValue::Float(_) | ConfigValue::Sequence(_) => default != actual,
        ConfigValue::Mapping(actual_map) => {
            let Some(default_map) = default.as_mapping() else {
                return Ok(Some(actual.clone()));
            };
            let nested = diff_mapping(default_map, actual_map, path)?;
            return Ok((!nested.is_empty()).then_some(ConfigValue::Mapping(nested)));
        }
        ConfigValue::Null | ConfigValue::Binary(_) | ConfigValue::Tagged { .. } => {
            return Err(Error::unsupported_type(actual.kind(), path));
        }
    };

    Ok(differs.then(|| actual.clone()))
}

fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
