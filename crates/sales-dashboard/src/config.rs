//! Global configuration for sales-dashboard
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/sales-dashboard/config.yaml

use sales_core::{OrderDraft, ReportDraft};
use sales_widgets::theme::{
    DEFAULT_BACKDROP_OPACITY, DEFAULT_PANEL_WIDTH, DEFAULT_PRIMARY,
};
use sales_widgets::{parse_hex_color, ModalTheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of submissions listed under recent activity
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 20;

/// Largest accepted recent activity limit
pub const MAX_RECENT_ACTIVITY_LIMIT: usize = 200;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialog colors and sizing
    pub theme: ThemeConfig,
    /// Values the dialogs are seeded with when opened
    pub defaults: DefaultsConfig,
    /// Number of submissions kept under recent activity
    pub recent_activity_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            defaults: DefaultsConfig::default(),
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
        }
    }
}

impl Config {
    /// Clamp values read from disk to their supported ranges
    pub fn validate(&mut self) {
        self.recent_activity_limit = self
            .recent_activity_limit
            .clamp(1, MAX_RECENT_ACTIVITY_LIMIT);
    }
}

/// Theme configuration section
///
/// Colors are specified as hex strings (e.g., "#3B7DDD")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Confirm button color
    pub primary: String,
    /// Backdrop opacity (0.0-1.0)
    pub backdrop_opacity: f32,
    /// Dialog panel width in pixels (320-800)
    pub panel_width: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#3B7DDD".to_string(),
            backdrop_opacity: DEFAULT_BACKDROP_OPACITY,
            panel_width: DEFAULT_PANEL_WIDTH,
        }
    }
}

impl ThemeConfig {
    /// Resolve into the theme passed to the dialog widgets
    ///
    /// An unparseable primary color falls back to the default with a warning.
    pub fn modal_theme(&self) -> ModalTheme {
        let primary = parse_hex_color(&self.primary).unwrap_or_else(|| {
            log::warn!("Invalid primary color '{}', using default", self.primary);
            DEFAULT_PRIMARY
        });
        ModalTheme::new(primary, self.backdrop_opacity, self.panel_width)
    }
}

/// Dialog defaults section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub report: ReportDraft,
    pub order: OrderDraft,
}

/// Get the default config file path
///
/// Returns: ~/.config/sales-dashboard/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("sales-dashboard")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> Config {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::info!(
                    "load_config: Loaded config - primary color {}, activity limit {}",
                    config.theme.primary,
                    config.recent_activity_limit
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}
