use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::SettingsError;

/// Runtime configuration. Every field has a default so a partial (or
/// absent) `settings.toml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Full URL of the JSON status endpoint.
    pub endpoint: String,
    pub poll_interval_ms: u64,
    pub pulse_ms: u64,
    /// Built-in theme name: `dark` or `light`.
    pub theme: String,
    /// Optional TOML palette file; takes precedence over `theme`.
    pub theme_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            endpoint: "http://127.0.0.1:8000/api/status".to_string(),
            poll_interval_ms: 400,
            pulse_ms: 700,
            theme: "dark".to_string(),
            theme_file: None,
            log_dir: None,
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str, origin: &Path) -> Result<Self, SettingsError> {
        toml::from_str(s).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.endpoint.trim().is_empty() {
            return Err(SettingsError::Invalid("endpoint must not be empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(SettingsError::Invalid("poll_interval_ms must be greater than zero".into()));
        }
        if !matches!(self.theme.as_str(), "dark" | "light") {
            return Err(SettingsError::Invalid(format!(
                "unknown theme `{}` (expected `dark` or `light`)",
                self.theme
            )));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }
}

/// Load settings from the per-user config file. A missing file (or a
/// platform without a config dir) yields the defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match super::config_dirs::settings_file() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Ok(Settings::default()),
    }
}

/// Load settings from an explicit path, which must exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Settings::from_toml(&text, path)
}
