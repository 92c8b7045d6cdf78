//! Admin HTTP interface
//!
//! Rocket routes, shared state and the index page renderer.

pub mod api;
pub mod handlers;
pub mod index_page;
pub mod routes;

pub use api::{AdminApi, AdminApiConfig};
pub use handlers::AdminState;
pub use index_page::{IndexPageRenderer, join_path};
pub use routes::admin_rocket;
