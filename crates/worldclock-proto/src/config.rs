mod appearance;
mod validation;

use serde::Deserialize;

pub use appearance::{Appearance, AppearanceColor, ThemePalette};
pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/worldclock/config.toml";

/// Grid layout of the clock cards.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default = "default_columns")]
    pub columns: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

fn default_columns() -> u32 {
    4
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Location of the persisted preference file. Falls back to the platform
    /// state directory when unset.
    #[serde(default)]
    pub preferences_path: Option<String>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub appearance: Appearance,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            preferences_path: None,
            layout: LayoutConfig::default(),
            appearance: Appearance::default(),
        }
    }
}
