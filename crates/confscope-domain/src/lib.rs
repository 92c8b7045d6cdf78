//! # confscope Domain Layer
//!
//! Core types shared by every other confscope crate.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Reserved admin index sections and fixed messages |
//! | [`value_objects`] | Generic configuration tree, inspection mode, admin links |
//! | [`ports`] | Interfaces implemented by the application layer |
//!
//! This crate has no knowledge of any particular serialization format or
//! HTTP framework. Lowering application configuration into [`ConfigValue`]
//! happens in `confscope-application`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::AdminLinkRegistry;
pub use value_objects::{AdminLink, ConfigMapping, ConfigMode, ConfigValue};
