//! Application configuration loading.
//!
//! Reads `config.toml` from the platform config directory (for example
//! `~/.config/searchpad/config.toml` on Linux). A missing file yields
//! defaults; a malformed file or unknown preset name logs a warning and
//! falls back rather than refusing to start.

use std::path::PathBuf;

use serde::Deserialize;

use crate::api::Preset;

/// Default backend base URL (the backend's development bind address).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5001";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the search backend
    pub endpoint: String,
    /// Preset selected when the app starts
    pub default_preset: Preset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_preset: Preset::General,
        }
    }
}

/// On-disk shape of the config file. All keys optional.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawConfig {
    endpoint: Option<String>,
    default_preset: Option<String>,
}

impl AppConfig {
    /// Load configuration from the platform config dir, or defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path.display().to_string()),
            Err(_) => Self::default(),
        }
    }

    /// Path to the config file, if a config directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "searchpad")?;
        Some(dirs.config_dir().join("config.toml"))
    }

    fn parse(contents: &str, origin: &str) -> Self {
        let raw: RawConfig = match toml::from_str(contents) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(%origin, error = %e, "malformed config file, using defaults");
                return Self::default();
            }
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();

        let default_preset = match raw.default_preset {
            Some(name) => name.parse::<Preset>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unknown default_preset");
                defaults.default_preset
            }),
            None => defaults.default_preset,
        };

        Self {
            endpoint: raw.endpoint.unwrap_or(defaults.endpoint),
            default_preset,
        }
    }
}
