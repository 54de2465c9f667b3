//! Project and user configuration.
//!
//! `.roicalc.toml` is looked up in the current directory and its ancestors,
//! then in the user config directory. Missing or invalid files fall back to
//! defaults with a log message; configuration never aborts a calculation.

mod core;
mod loader;

pub use self::core::{DisplayConfig, OutputConfig, RoicalcConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, try_load_config_from_path,
    user_config_path, CONFIG_FILE_NAME,
};

/// Contents written by `roicalc init`
pub const DEFAULT_CONFIG: &str = r#"# roicalc configuration

[output]
# terminal, json or markdown
default_format = "terminal"

[display]
# auto, always or never
color = "auto"
# print the baseline vs current input table under the report
show_breakdown = false
"#;
