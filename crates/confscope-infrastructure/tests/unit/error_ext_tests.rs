//! Error Extension Tests

use confscope_domain::error::{Error, Result};
use confscope_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context_wraps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    let parse_error = "not a number".parse::<u16>().unwrap_err();

    let result: Result<u16> = Err(parse_error).config_context("invalid port");

    assert!(matches!(
        result,
        Err(Error::Configuration { ref message, source: Some(_) }) if message.starts_with("invalid port: ")
    ));
}

#[test]
fn test_serialization_context() {
    let yaml_error = serde_yaml::from_str::<u32>("[1, 2]").unwrap_err();

    let result: Result<u32> = Err(yaml_error).serialization_context("bad document");

    assert!(matches!(result, Err(Error::Serialization { .. })));
}

#[test]
fn test_source_chain_is_kept() {
    use std::error::Error as _;

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");

    let err = Err::<(), _>(io_error)
        .io_context("Failed to read runtime config: /etc/overrides.yaml")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "I/O error: Failed to read runtime config: /etc/overrides.yaml: denied"
    );
    let source = err.source().expect("source kept");
    assert_eq!(source.to_string(), "denied");
}
