//! Main configuration type and TOML persistence.
//!
//! The config lives at `<config_dir>/filedeck/config.toml` and is created
//! with defaults on first run. Every field carries `#[serde(default)]` so
//! older config files keep loading after new fields are added.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::LogLevel;

fn default_server_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_min_pane_percent() -> f32 {
    10.0
}

fn default_divider_width() -> f32 {
    1.0
}

fn default_divider_hit_width() -> f32 {
    8.0
}

fn default_font_size() -> f32 {
    13.0
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the file projection server.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Workspace-relative path the initial pane opens at ("" = root).
    #[serde(default)]
    pub start_path: String,

    /// Smallest share (percent of the containing split) a pane can be
    /// resized down to.
    #[serde(default = "default_min_pane_percent")]
    pub min_pane_percent: f32,

    /// Visual width of the divider between panes, in points.
    #[serde(default = "default_divider_width")]
    pub divider_width: f32,

    /// Width of the hit area for divider drag detection, in points.
    #[serde(default = "default_divider_hit_width")]
    pub divider_hit_width: f32,

    /// Base font size for pane content.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Initial window width in points.
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points.
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Log verbosity (overridden by `--log-level` and `RUST_LOG`).
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            start_path: String::new(),
            min_pane_percent: default_min_pane_percent(),
            divider_width: default_divider_width(),
            divider_hit_width: default_divider_hit_width(),
            font_size: default_font_size(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL (builder style, used in tests).
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the initial path (builder style, used in tests).
    pub fn with_start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = path.into();
        self
    }

    /// Set the minimum pane share (builder style, used in tests).
    pub fn with_min_pane_percent(mut self, percent: f32) -> Self {
        self.min_pane_percent = percent;
        self
    }

    /// Path of the config file: `<config_dir>/filedeck/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("filedeck").join("config.toml"))
    }

    /// Load the config from the default location, creating it with
    /// defaults when missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from an explicit path, creating it when missing.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
