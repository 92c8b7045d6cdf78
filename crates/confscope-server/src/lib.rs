//! # confscope Server
//!
//! Admin HTTP surface exposing a service's effective configuration and a
//! browsable index of its administrative endpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use confscope_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config discovery (cwd, ./confscope/, XDG) + environment
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AdminServerBuilder`] | Wires registry, inspector and runtime source into [`AdminState`] |
//! | [`admin::AdminApi`] | Binds and launches the Rocket admin server |
//! | [`admin::IndexPageRenderer`] | HTML index page |
//!
//! ## Endpoints
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | Admin index page |
//! | `GET /config?mode=<""|diff|defaults>` | Configuration view as YAML |
//! | `GET /runtime_config` | Runtime overrides as YAML |

pub mod admin;
pub mod builder;
pub mod constants;
pub mod init;

pub use admin::AdminState;
pub use builder::{AdminServerBuilder, BuilderError};
pub use init::{dump_config, run};
