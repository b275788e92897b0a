//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing or unreadable file
//! yields the defaults.

use std::path::{Path, PathBuf};

use alumni_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

/// Environment variable that overrides [`BackendSettings::api_base_url`].
pub const API_URL_ENV: &str = "ALUMNI_API_URL";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection settings.
    pub backend: BackendSettings,

    /// Main window settings.
    pub window: WindowSettings,
}

impl Settings {
    /// Load settings from the default path, then apply environment overrides.
    ///
    /// On first run the defaults are written out so the file can be edited.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            if let Err(e) = Self::default().save_to(&path) {
                crate::error::log_error(&e);
            }
        }
        let mut settings = Self::load_from(&path);
        settings.apply_env_override(std::env::var(API_URL_ENV).ok());
        settings
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                crate::error::log_error(&GuiError::SettingsLoad {
                    reason: e.to_string(),
                });
                Self::default()
            }
        }
    }

    /// Replace the backend URL with `value` when it is set and non-blank.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::info!("Using backend from {}: {}", API_URL_ENV, url);
            self.backend.api_base_url = url;
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {}", e),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("edu", "AlumniAssociation", "AlumniPortal")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Origin of the REST API, without a trailing `/api`.
    pub api_base_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Initial main window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}
