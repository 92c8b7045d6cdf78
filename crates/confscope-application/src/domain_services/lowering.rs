//! YAML lowering
//!
//! Converts between YAML documents and [`ConfigValue`] trees. Lowering goes
//! through YAML text, so both sides of a diff end up with exactly the
//! types the format preserves, whatever Rust types they started from.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use confscope_domain::error::{Error, Result};
use confscope_domain::{ConfigMapping, ConfigValue};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};

use crate::ports::ConfigDocument;

const BINARY_TAG: &str = "binary";

/// Marshal a document and decode it back into a generic mapping
///
/// Fails with [`Error::Serialization`] if marshaling fails, the text does not
/// parse, or the top-level value is not a mapping.
pub fn lower_document(doc: &dyn ConfigDocument) -> Result<ConfigMapping> {
    let text = doc.to_yaml_string()?;
    lower_str(&text)
}

/// Decode YAML text into a generic mapping
pub fn lower_str(text: &str) -> Result<ConfigMapping> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| Error::serialization_with_source("Failed to decode YAML config", e))?;
    match lower_value(value)? {
        ConfigValue::Mapping(mapping) => Ok(mapping),
        // An empty document decodes to null
        ConfigValue::Null => Ok(ConfigMapping::new()),
        other => Err(Error::serialization(format!(
            "Top-level config must be a mapping, found {}",
            other.kind()
        ))),
    }
}

/// Convert one YAML node
pub fn lower_value(value: Value) -> Result<ConfigValue> {
    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => lower_number(&n)?,
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(seq) => ConfigValue::Sequence(
            seq.into_iter()
                .map(lower_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(map) => ConfigValue::Mapping(lower_mapping(map)?),
        Value::Tagged(tagged) => lower_tagged(*tagged)?,
    })
}

fn lower_number(n: &Number) -> Result<ConfigValue> {
    // Unsigned values above i64::MAX only fit a float
    n.as_i64()
        .map(ConfigValue::Int)
        .or_else(|| n.as_f64().map(ConfigValue::Float))
        .ok_or_else(|| Error::serialization(format!("Unrepresentable number: {n}")))
}

/// Keys that collide once stringified (`1` and `"1"`) are rejected
fn lower_mapping(map: Mapping) -> Result<ConfigMapping> {
    let mut lowered = ConfigMapping::new();
    for (k, v) in map {
        let key = lower_key(k)?;
        if lowered.contains_key(&key) {
            return Err(Error::serialization(format!(
                "Duplicate mapping key after stringification: {key}"
            )));
        }
        let value = lower_value(v)?;
        lowered.insert(key, value);
    }
    Ok(lowered)
}

fn lower_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => Err(Error::serialization(
            "Mapping keys must be scalars",
        )),
    }
}

fn lower_tagged(tagged: TaggedValue) -> Result<ConfigValue> {
    let rendered = tagged.tag.to_string();
    let tag = match rendered.trim_start_matches('!') {
        "" => rendered.clone(),
        bare => bare.to_string(),
    };
    if tag == BINARY_TAG {
        let Value::String(encoded) = tagged.value else {
            return Err(Error::serialization("!binary node must hold a string"));
        };
        let compact: String = encoded.split_whitespace().collect();
        let bytes = STANDARD
            .decode(compact)
            .map_err(|e| Error::serialization_with_source("Invalid !binary payload", e))?;
        return Ok(ConfigValue::Binary(bytes));
    }
    Ok(ConfigValue::Tagged {
        tag,
        value: Box::new(lower_value(tagged.value)?),
    })
}

/// Convert a generic tree back into a YAML node
pub fn raise_value(value: &ConfigValue) -> Value {
    match value {
        ConfigValue::Null => Value::Null,
        ConfigValue::Bool(b) => Value::Bool(*b),
        ConfigValue::Int(i) => Value::Number(Number::from(*i)),
        ConfigValue::Float(f) => Value::Number(Number::from(*f)),
        ConfigValue::String(s) => Value::String(s.clone()),
        ConfigValue::Sequence(seq) => Value::Sequence(seq.iter().map(raise_value).collect()),
        ConfigValue::Mapping(map) => raise_mapping(map),
        ConfigValue::Binary(bytes) => Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(BINARY_TAG),
            value: Value::String(STANDARD.encode(bytes)),
        })),
        ConfigValue::Tagged { tag, value } => Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value: raise_value(value),
        })),
    }
}

/// Convert a generic mapping back into a YAML mapping node
pub fn raise_mapping(map: &ConfigMapping) -> Value {
    Value::Mapping(
        map.iter()
            .map(|(k, v)| (Value::String(k.clone()), raise_value(v)))
            .collect(),
    )
}

/// Render a generic mapping as YAML text
pub fn mapping_to_yaml(map: &ConfigMapping) -> Result<String> {
    serde_yaml::to_string(&raise_mapping(map))
        .map_err(|e| Error::serialization_with_source("Failed to render YAML", e))
}
