use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::output::OutputFormat;

/// Root configuration structure, read from `.roicalc.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoicalcConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Display configuration for terminal output
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `terminal`, `json`, `markdown`
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// One of `auto`, `always`, `never`
    #[serde(default)]
    pub color: Option<String>,

    /// Print the baseline vs current input table with terminal output
    #[serde(default)]
    pub show_breakdown: Option<bool>,
}

impl RoicalcConfig {
    /// Configured default output format, falling back to terminal
    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(|name| {
                let parsed = OutputFormat::parse(name);
                if parsed.is_none() {
                    log::warn!("Unknown output.default_format '{}', using terminal", name);
                }
                parsed
            })
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.display
            .as_ref()
            .and_then(|d| d.color.as_deref())
            .and_then(|name| {
                let parsed = ColorMode::parse(name);
                if parsed.is_none() {
                    log::warn!("Unknown display.color '{}', using auto", name);
                }
                parsed
            })
            .unwrap_or(ColorMode::Auto)
    }

    pub fn show_breakdown(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.show_breakdown)
            .unwrap_or(false)
    }
}
