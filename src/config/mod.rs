// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Style service address, catalog image path and timeout
//! - `[outfits]` - Garment ids offered in the outfit picker
//! - `[moodboards]` - Directory holding the moodboard artwork
//!
//! The configuration is read-only: the client never writes it back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use style_spark::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{}", config.service.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Style service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base address of the service, e.g. `http://127.0.0.1:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path under the base address serving `{id}.jpg` catalog images.
    #[serde(default = "default_catalog_image_path")]
    pub catalog_image_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_image_path: default_catalog_image_path(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Returns the timeout clamped to the supported range.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
    }
}

/// Garments offered in the outfit picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitsConfig {
    #[serde(default = "default_tops")]
    pub tops: Vec<String>,

    #[serde(default = "default_bottoms")]
    pub bottoms: Vec<String>,
}

impl Default for OutfitsConfig {
    fn default() -> Self {
        Self {
            tops: default_tops(),
            bottoms: default_bottoms(),
        }
    }
}

/// Moodboard artwork settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MoodboardsConfig {
    /// Directory containing the moodboard and gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub outfits: OutfitsConfig,

    #[serde(default)]
    pub moodboards: MoodboardsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> String {
    DEFAULT_SERVICE_BASE_URL.to_string()
}

fn default_catalog_image_path() -> String {
    DEFAULT_CATALOG_IMAGE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_tops() -> Vec<String> {
    DEFAULT_TOPS.iter().map(ToString::to_string).collect()
}

fn default_bottoms() -> Vec<String> {
    DEFAULT_BOTTOMS.iter().map(ToString::to_string).collect()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
