//! Settings configuration
//!
//! Manages user-configurable defaults for autocomplete widgets.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::platform::PlatformTraits;
use crate::core::widget::WidgetConfig;

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interaction settings
    pub widget: WidgetSettings,
    /// Option lookup settings
    pub search: SearchSettings,
    /// External mutation watcher settings
    pub watcher: WatcherSettings,
}

/// Interaction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Minimum query length before the source is consulted
    pub min_length: usize,
    /// Initial query text
    pub default_value: String,
    /// Pre-select the first result when results arrive
    pub autoselect: bool,
    /// Explicit actions list every value regardless of `min_length`
    pub show_all_values: bool,
    /// Confirm the selected option when focus leaves the widget
    pub confirm_on_blur: bool,
}

/// Option lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Ignore results answering anything but the latest request
    #[serde(default)]
    pub discard_stale_results: bool,
}

/// External mutation watcher settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherSettings {
    /// Poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content).context("invalid settings TOML")?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for autocomplete-widget.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "autocomplete", "autocomplete-widget")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        parse_with_defaults(&content)
    }

    /// Build the runtime configuration for a widget on `platform`.
    pub fn widget_config(&self, platform: PlatformTraits) -> WidgetConfig {
        WidgetConfig {
            min_length: self.widget.min_length,
            default_value: self.widget.default_value.clone(),
            autoselect: self.widget.autoselect,
            show_all_values: self.widget.show_all_values,
            confirm_on_blur: self.widget.confirm_on_blur,
            discard_stale_results: self.search.discard_stale_results,
            poll_interval: Duration::from_millis(self.watcher.poll_interval_ms),
            platform,
        }
    }
}
