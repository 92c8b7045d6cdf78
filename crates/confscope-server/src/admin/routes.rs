//! Admin API routes
//!
//! Route definitions for the admin endpoints.

use rocket::{Build, Rocket, routes};

use super::handlers::{AdminState, get_config, get_runtime_config, index_page};

/// Create the admin rocket instance
///
/// Routes are mounted under the renderer's path prefix (or `/`), so the
/// links on the index page resolve against this server.
///
/// Routes:
/// - GET `/` - Admin index page
/// - GET `/config?mode=<mode>` - Configuration view (full, diff, defaults)
/// - GET `/runtime_config` - Runtime overrides
pub fn admin_rocket(state: AdminState) -> Rocket<Build> {
    let base = match state.renderer.path_prefix().trim_end_matches('/') {
        "" => "/".to_string(),
        prefix => prefix.to_string(),
    };

    rocket::build()
        .manage(state)
        .mount(base, routes![index_page, get_config, get_runtime_config])
}
