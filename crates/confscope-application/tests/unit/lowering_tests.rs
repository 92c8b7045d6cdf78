//! Tests for YAML lowering

use confscope_application::lowering::{lower_document, lower_str, mapping_to_yaml, raise_value};
use confscope_domain::{ConfigValue, Error};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Limits {
    max_series: u32,
    ratio: f32,
    zones: Vec<String>,
}

#[derive(Serialize)]
struct Sample {
    name: String,
    port: u16,
    tls: Option<String>,
    limits: Limits,
}

fn sample() -> Sample {
    Sample {
        name: "querier".to_string(),
        port: 9009,
        tls: None,
        limits: Limits {
            max_series: 1000,
            ratio: 0.5,
            zones: vec!["a".to_string()],
        },
    }
}

#[test]
fn test_lower_document_produces_generic_tree() {
    let lowered = lower_document(&sample()).expect("lowering");

    assert_eq!(lowered.get("name"), Some(&ConfigValue::from("querier")));
    assert_eq!(lowered.get("port"), Some(&ConfigValue::Int(9009)));
    assert_eq!(lowered.get("tls"), Some(&ConfigValue::Null));

    let limits = lowered
        .get("limits")
        .and_then(ConfigValue::as_mapping)
        .expect("limits mapping");
    assert_eq!(limits.get("max_series"), Some(&ConfigValue::Int(1000)));
    assert_eq!(limits.get("ratio"), Some(&ConfigValue::Float(0.5)));
    assert_eq!(limits.get("zones"), Some(&ConfigValue::from(vec!["a"])));
}

#[test]
fn test_lower_document_from_json_value() {
    let value = serde_json::json!({ "a": { "b": [1, 2] }, "c": "x" });
    let lowered = lower_document(&value).expect("lowering");
    assert_eq!(lowered.len(), 2);
    assert!(lowered.get("a").is_some_and(ConfigValue::is_mapping));
}

#[test]
fn test_scalar_keys_become_strings() {
    let lowered = lower_str("1: one\ntrue: yes\n").expect("lowering");
    assert_eq!(lowered.get("1"), Some(&ConfigValue::from("one")));
    assert!(lowered.contains_key("true"));
}

#[test]
fn test_non_scalar_keys_are_rejected() {
    let err = lower_str("? [a, b]\n: value\n").expect_err("sequence key");
    assert!(matches!(err, Error::Serialization { .. }));
}

#[test]
fn test_keys_colliding_after_stringification_are_rejected() {
    let err = lower_str("1: a\n\"1\": b\n").expect_err("colliding keys");
    match err {
        Error::Serialization { message, .. } => assert!(message.contains("Duplicate mapping key")),
        other => panic!("Expected Serialization, got {other:?}"),
    }

    let err = lower_str("limits:\n  true: a\n  'true': b\n").expect_err("nested collision");
    assert!(matches!(err, Error::Serialization { .. }));
}

#[test]
fn test_top_level_must_be_mapping() {
    let err = lower_str("- a\n- b\n").expect_err("sequence document");
    assert!(matches!(err, Error::Serialization { .. }));

    let err = lower_document(&vec![1, 2, 3]).expect_err("sequence document");
    assert!(matches!(err, Error::Serialization { .. }));
}

#[test]
fn test_invalid_yaml_is_serialization_error() {
    let err = lower_str("a: [unclosed").expect_err("invalid yaml");
    assert!(matches!(err, Error::Serialization { .. }));
}

#[test]
fn test_binary_tag_is_decoded() {
    let lowered = lower_str("blob: !binary aGVsbG8=\n").expect("lowering");
    assert_eq!(
        lowered.get("blob"),
        Some(&ConfigValue::Binary(b"hello".to_vec()))
    );
}

#[test]
fn test_custom_tag_is_preserved() {
    let lowered = lower_str("mode: !Fixed 3\n").expect("lowering");
    match lowered.get("mode") {
        Some(ConfigValue::Tagged { tag, value }) => {
            assert_eq!(tag, "Fixed");
            assert_eq!(**value, ConfigValue::Int(3));
        }
        other => panic!("Expected tagged node, got {other:?}"),
    }
}

#[test]
fn test_raise_then_lower_is_stable() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), ConfigValue::Int(-4));
    map.insert("b".to_string(), ConfigValue::Float(2.5));
    map.insert("c".to_string(), ConfigValue::Binary(vec![0, 159, 255]));
    map.insert("d".to_string(), ConfigValue::from(vec!["x", "y"]));

    let text = mapping_to_yaml(&map).expect("render");
    let lowered = lower_str(&text).expect("lowering");
    assert_eq!(lowered, map);
}

#[test]
fn test_raise_value_keeps_kinds() {
    assert_eq!(raise_value(&ConfigValue::Int(2)), serde_yaml::Value::from(2));
    assert_eq!(raise_value(&ConfigValue::Null), serde_yaml::Value::Null);
    assert_eq!(
        raise_value(&ConfigValue::from("s")),
        serde_yaml::Value::String("s".to_string())
    );
}
