//! Server layer constants

/// Title of the admin index page
pub const DEFAULT_INDEX_TITLE: &str = "confscope";

/// Media type of YAML responses
pub const YAML_MEDIA_TOP: &str = "application";

/// Media subtype of YAML responses
pub const YAML_MEDIA_SUB: &str = "yaml";

/// Built-in admin links registered by the builder: (path, description)
pub const BUILTIN_ADMIN_LINKS: [(&str, &str); 4] = [
    ("/config", "Current Config (including the default values)"),
    ("/config?mode=diff", "Current Config (show only values that differ from the defaults)"),
    ("/config?mode=defaults", "Default Config"),
    ("/runtime_config", "Runtime Config"),
];
