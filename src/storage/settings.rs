//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_ENDPOINT;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Chat API endpoint receiving the POSTed messages
    #[serde(default = "default_endpoint")]
    pub api_endpoint: String,
    /// Request deadline for a single chat POST, in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Milliseconds between typewriter ticks (one character per tick)
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Font size: "small", "medium", or "large"
    #[serde(default = "default_font_size")]
    pub font_size: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_reveal_interval_ms() -> u64 {
    3
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_font_size() -> String {
    "medium".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_endpoint: default_endpoint(),
            request_timeout_secs: default_timeout_secs(),
            reveal_interval_ms: default_reveal_interval_ms(),
            theme: default_theme(),
            font_size: default_font_size(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.api_endpoint.trim().is_empty() {
            self.api_endpoint = default_endpoint();
        }

        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 300);
        self.reveal_interval_ms = self.reveal_interval_ms.clamp(1, 200);

        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }

        if !["small", "medium", "large"].contains(&self.font_size.as_str()) {
            self.font_size = "medium".to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|p| load_settings_from(&p)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
