//! Domain layer constants
//!
//! Section labels and fixed messages shared between the registry, the
//! admin server and any subsystem that registers links.

// ============================================================================
// ADMIN INDEX SECTIONS
// ============================================================================

/// Section for operator-facing administrative endpoints
pub const SECTION_ADMIN_ENDPOINTS: &str = "Admin Endpoints:";

/// Section for endpoints whose use is destructive or irreversible
///
/// Purely a display label; nothing in the registry enforces it.
pub const SECTION_DANGEROUS: &str = "Dangerous:";

// ============================================================================
// RUNTIME CONFIG
// ============================================================================

/// Body returned when no runtime configuration is loaded
pub const RUNTIME_CONFIG_MISSING_MESSAGE: &str = "runtime config file doesn't exist";

// ============================================================================
// CONFIG INSPECTION
// ============================================================================

/// Query parameter value selecting the diff view
pub const CONFIG_MODE_DIFF: &str = "diff";

/// Query parameter value selecting the defaults view
pub const CONFIG_MODE_DEFAULTS: &str = "defaults";
