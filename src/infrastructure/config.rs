// src/infrastructure/config.rs
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME};
use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notekeeper
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Empty means the platform data directory
    #[serde(default)]
    pub database_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_date_format() -> String { "%b %d, %H:%M:%S".to_string() }
fn default_preview_width() -> usize { 60 }

impl DisplayConfig {
    /// Reject date formats chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Invalid date_format {:?} in [display]", self.date_format);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            preview_width: default_preview_width(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        config
            .display
            .validate()
            .context("Invalid display configuration")?;

        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Database location: configured path, or `<data dir>/notekeeper/notes.db`
    pub fn database_path(&self) -> Result<PathBuf> {
        if !self.storage.database_path.is_empty() {
            return Ok(PathBuf::from(&self.storage.database_path));
        }
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(data_dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
    }
}

/// Default config location: `<config dir>/notekeeper/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
