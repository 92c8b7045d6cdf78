//! Tests for the config inspector views

use confscope_application::{ConfigInspector, lower_str};
use confscope_domain::{ConfigMode, ConfigValue, Error};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Clone)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Serialize, Clone)]
struct ServiceConfig {
    target: String,
    server: Server,
    replication_factor: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            target: "all".to_string(),
            server: Server {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            replication_factor: 3,
        }
    }
}

fn actual() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.server.port = 9009;
    config
}

#[test]
fn test_full_mode_renders_actual_config() {
    let inspector = ConfigInspector::from_configs(actual(), ServiceConfig::default());
    let yaml = inspector.render(ConfigMode::Full).expect("render");

    assert_eq!(yaml, serde_yaml::to_string(&actual()).expect("yaml"));
    assert!(yaml.contains("port: 9009"));
}

#[test]
fn test_full_mode_keeps_declaration_order() {
    let inspector = ConfigInspector::from_configs(actual(), ServiceConfig::default());
    let yaml = inspector.render(ConfigMode::Full).expect("render");

    let target = yaml.find("target").expect("target key");
    let replication = yaml.find("replication_factor").expect("replication key");
    assert!(target < replication);
}

#[test]
fn test_defaults_mode_renders_default_config() {
    let inspector = ConfigInspector::from_configs(actual(), ServiceConfig::default());
    let yaml = inspector.render(ConfigMode::Defaults).expect("render");
    assert!(yaml.contains("port: 8080"));
    assert!(!yaml.contains("9009"));
}

#[test]
fn test_diff_mode_renders_only_changes() {
    let inspector = ConfigInspector::from_configs(actual(), ServiceConfig::default());
    let yaml = inspector.render(ConfigMode::Diff).expect("render");

    let lowered = lower_str(&yaml).expect("diff is valid yaml");
    let mut server = BTreeMap::new();
    server.insert("port".to_string(), ConfigValue::Int(9009));
    let mut expected = BTreeMap::new();
    expected.insert("server".to_string(), ConfigValue::Mapping(server));
    assert_eq!(lowered, expected);
}

#[test]
fn test_diff_of_defaults_against_themselves_is_empty() {
    let inspector = ConfigInspector::from_configs(ServiceConfig::default(), ServiceConfig::default());
    assert!(inspector.diff().expect("diff").is_empty());

    let yaml = inspector.render(ConfigMode::Diff).expect("render");
    assert_eq!(yaml.trim(), "{}");
}

#[test]
fn test_configs_of_different_types_can_be_compared() {
    let defaults = serde_json::json!({ "server": { "host": "127.0.0.1", "port": 8080 } });
    let inspector = ConfigInspector::from_configs(actual(), defaults);
    let diff = inspector.diff().expect("diff");

    assert!(diff.contains_key("target"));
    assert!(diff.contains_key("replication_factor"));
    assert!(diff.contains_key("server"));
}

#[derive(Serialize)]
enum Storage {
    Filesystem { dir: String },
}

#[derive(Serialize)]
struct WithEnum {
    storage: Storage,
}

#[test]
fn test_unsupported_node_fails_the_diff_view_only() {
    let make = || WithEnum {
        storage: Storage::Filesystem {
            dir: "/data".to_string(),
        },
    };
    let inspector = ConfigInspector::from_configs(make(), make());

    let err = inspector.render(ConfigMode::Diff).expect_err("tagged enum");
    assert!(matches!(err, Error::UnsupportedType { .. }));

    // The unmodified views don't lower anything
    assert!(inspector.render(ConfigMode::Full).is_ok());
    assert!(inspector.render(ConfigMode::Defaults).is_ok());
}

#[test]
fn test_non_mapping_config_is_serialization_error() {
    let inspector = ConfigInspector::from_configs(vec![1, 2], ServiceConfig::default());
    let err = inspector.render(ConfigMode::Diff).expect_err("sequence config");
    assert!(matches!(err, Error::Serialization { .. }));
}
