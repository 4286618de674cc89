use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file failed")]
    Read {
        #[source]
        source: std::io::Error,
    },
    #[error("parse config file failed")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
    #[error("max-visible-panes must be at least 1")]
    ZeroMaxVisiblePanes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Ceiling on how many panes are shown at once.
    #[serde(default = "default_max_visible_panes")]
    pub max_visible_panes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible_panes: default_max_visible_panes(),
        }
    }
}

fn default_max_visible_panes() -> usize {
    3
}

impl Config {
    /// Reads the user config file; a missing file falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = user_config_path();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { source }),
        };
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse { source })?;
        if config.max_visible_panes == 0 {
            return Err(ConfigError::ZeroMaxVisiblePanes);
        }
        Ok(config)
    }
}

fn user_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
            .join("ribbon")
            .join("config.toml")
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
            .join("Library")
            .join("Application Support")
            .join("ribbon")
            .join("config.toml")
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
            return config_home.join("ribbon").join("config.toml");
        }
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
            .join(".config")
            .join("ribbon")
            .join("config.toml")
    }
}
