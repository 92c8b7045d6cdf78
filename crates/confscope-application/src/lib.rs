//! Application Layer - confscope
//!
//! Implements the two pieces of real logic behind the diagnostics surface:
//!
//! - **Config inspection**: lowering arbitrary `Serialize` configuration
//!   through YAML into [`ConfigValue`](confscope_domain::ConfigValue) trees and
//!   computing the structural diff between an actual and a default config.
//! - **Admin index**: the mutex-guarded registry that subsystems populate with
//!   admin links.
//!
//! ## Ports (Interfaces)
//!
//! - [`ports::ConfigDocument`]: anything that can be marshaled to YAML
//! - [`ports::RuntimeConfigSource`]: optional runtime overrides document
//!
//! ## Dependencies
//!
//! This crate depends only on `confscope-domain` and pure serialization
//! libraries. HTTP and configuration loading live in outer layers.

pub mod domain_services;
pub mod ports;

pub use domain_services::*;
pub use ports::*;
