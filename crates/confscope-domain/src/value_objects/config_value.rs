//! Generic configuration tree
//!
//! Application configuration is lowered into this representation before it
//! is compared, so the diff never needs to know the concrete record types.

use std::collections::BTreeMap;
use std::fmt;

/// A mapping node, keyed by string and ordered by key
pub type ConfigMapping = BTreeMap<String, ConfigValue>;

/// One node of a lowered configuration tree
///
/// Equality is structural. Floats compare by bit pattern, so a tree is always
/// equal to itself even when it contains `NaN`, and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    /// Explicit null / absent optional value
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// Ordered sequence
    Sequence(Vec<ConfigValue>),
    /// Nested mapping
    Mapping(ConfigMapping),
    /// Raw binary blob (`!binary` tagged node in YAML)
    Binary(Vec<u8>),
    /// Any other explicitly tagged node
    Tagged {
        /// Tag without the leading `!`
        tag: String,
        /// Tagged content
        value: Box<ConfigValue>,
    },
}

impl ConfigValue {
    /// Name of the node kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Binary(_) => "binary",
            Self::Tagged { .. } => "tagged",
        }
    }

    /// Borrow the mapping if this node is one
    pub fn as_mapping(&self) -> Option<&ConfigMapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Whether this is a mapping node
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (
                Self::Tagged { tag: ta, value: va },
                Self::Tagged { tag: tb, value: vb },
            ) => ta == tb && va == vb,
            _ => false,
        }
    }
}

impl Eq for ConfigValue {}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => write!(f, "[{} items]", items.len()),
            Self::Mapping(map) => write!(f, "{{{} keys}}", map.len()),
            Self::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Self::Tagged { tag, value } => write!(f, "!{tag} {value}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ConfigMapping> for ConfigValue {
    fn from(value: ConfigMapping) -> Self {
        Self::Mapping(value)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}
