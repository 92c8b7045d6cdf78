//! Admin request handlers
//!
//! The index page, the three config views and the runtime config.

use std::sync::Arc;

use confscope_application::{AdminIndex, ConfigInspector, RuntimeConfigSource};
use confscope_domain::ConfigMode;
use confscope_domain::constants::RUNTIME_CONFIG_MISSING_MESSAGE;
use rocket::http::{ContentType, Status};
use rocket::response::content::RawHtml;
use rocket::{State, get};
use tracing::error;

use super::index_page::IndexPageRenderer;
use crate::constants::{YAML_MEDIA_SUB, YAML_MEDIA_TOP};

/// Admin handler state containing shared service references
#[derive(Clone)]
pub struct AdminState {
    /// Admin link registry shown on the index page
    pub index: Arc<AdminIndex>,
    /// Actual and default configuration of the service
    pub inspector: ConfigInspector,
    /// Runtime overrides, if the service has any
    pub runtime_config: Option<Arc<dyn RuntimeConfigSource>>,
    /// Index page renderer, carries the path prefix
    pub renderer: Arc<IndexPageRenderer>,
}

impl std::fmt::Debug for AdminState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminState")
            .field("index", &self.index)
            .field("inspector", &self.inspector)
            .field("runtime_config", &self.runtime_config.is_some())
            .field("renderer", &self.renderer)
            .finish()
    }
}

/// Error response: status plus a plain text message
pub type ErrorResponse = (Status, String);

fn yaml() -> ContentType {
    ContentType::new(YAML_MEDIA_TOP, YAML_MEDIA_SUB)
}

/// Admin index page
#[get("/")]
pub fn index_page(state: &State<AdminState>) -> Result<RawHtml<String>, ErrorResponse> {
    state
        .renderer
        .render(&state.index.snapshot())
        .map(RawHtml)
        .map_err(|e| {
            error!(error = %e, "Failed to render admin index");
            (Status::InternalServerError, e.to_string())
        })
}

/// Configuration view selected by the `mode` query parameter
///
/// Missing, empty or unknown modes return the full configuration.
#[get("/config?<mode>")]
pub fn get_config(
    mode: Option<&str>,
    state: &State<AdminState>,
) -> Result<(ContentType, String), ErrorResponse> {
    let mode = ConfigMode::from_param(mode);
    match state.inspector.render(mode) {
        Ok(body) => Ok((yaml(), body)),
        Err(e) => {
            if e.is_coverage_gap() {
                error!(mode = %mode, error = %e, "Config diff reached an unsupported node type");
            } else {
                error!(mode = %mode, error = %e, "Failed to render config");
            }
            Err((Status::InternalServerError, e.to_string()))
        }
    }
}

/// Runtime configuration, or a plain text notice when none is loaded
#[get("/runtime_config")]
pub fn get_runtime_config(
    state: &State<AdminState>,
) -> Result<(ContentType, String), ErrorResponse> {
    let Some(document) = state
        .runtime_config
        .as_ref()
        .and_then(|source| source.runtime_config())
    else {
        return Ok((ContentType::Plain, RUNTIME_CONFIG_MISSING_MESSAGE.to_string()));
    };

    document
        .to_yaml_string()
        .map(|body| (yaml(), body))
        .map_err(|e| {
            error!(error = %e, "Failed to render runtime config");
            (Status::InternalServerError, e.to_string())
        })
}
