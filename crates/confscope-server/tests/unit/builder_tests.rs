//! Admin server builder tests

use std::sync::Arc;

use confscope_application::{AdminIndex, ConfigInspector};
use confscope_domain::constants::SECTION_ADMIN_ENDPOINTS;
use confscope_server::builder::builtin_links;
use confscope_server::{AdminServerBuilder, BuilderError};
use serde::Serialize;

#[derive(Serialize)]
struct Config {
    port: u16,
}

fn inspector() -> ConfigInspector {
    ConfigInspector::from_configs(Config { port: 1 }, Config { port: 2 })
}

#[test]
fn test_build_requires_inspector() {
    let result = AdminServerBuilder::new().build();
    assert!(matches!(
        result,
        Err(BuilderError::MissingDependency("config inspector"))
    ));
}

#[test]
fn test_build_registers_builtin_links() {
    let state = AdminServerBuilder::new()
        .with_config_inspector(inspector())
        .build()
        .unwrap();

    let snapshot = state.index.snapshot();
    let links = &snapshot[SECTION_ADMIN_ENDPOINTS];
    assert_eq!(
        links.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "/config",
            "/config?mode=defaults",
            "/config?mode=diff",
            "/runtime_config"
        ]
    );
    assert_eq!(
        links["/config"],
        "Current Config (including the default values)"
    );
    assert!(state.runtime_config.is_none());
}

#[test]
fn test_shared_index_keeps_existing_links() {
    let index = Arc::new(AdminIndex::new());
    index.add_link("Dangerous:", "/flush", "Flush");

    let state = AdminServerBuilder::new()
        .with_index(Arc::clone(&index))
        .with_config_inspector(inspector())
        .with_path_prefix("/api")
        .build()
        .unwrap();

    assert!(Arc::ptr_eq(&state.index, &index));
    assert_eq!(index.len(), 5);
    assert_eq!(state.renderer.path_prefix(), "/api");
}

#[test]
fn test_builtin_links_are_registered_through_the_port() {
    let links: Vec<_> = builtin_links().collect();
    assert_eq!(links.len(), 4);
    assert!(links.iter().all(|link| link.section == SECTION_ADMIN_ENDPOINTS));

    let index = Arc::new(AdminIndex::new());
    index.add_link(SECTION_ADMIN_ENDPOINTS, "/config", "stale description");

    AdminServerBuilder::new()
        .with_index(Arc::clone(&index))
        .with_config_inspector(inspector())
        .build()
        .unwrap();

    let snapshot = index.snapshot();
    assert_eq!(
        snapshot[SECTION_ADMIN_ENDPOINTS]["/config"],
        "Current Config (including the default values)"
    );
    assert_eq!(index.len(), 4);
}
