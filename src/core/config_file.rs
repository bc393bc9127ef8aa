//! User configuration file
//!
//! An optional `~/.config/lumen/settings.json` holding preferences that
//! would otherwise need CLI flags on every launch. A missing or malformed
//! file degrades to built-in defaults, never an error.

use crate::ui::theme::ThemeVariant;
use anyhow::{Context, Result};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Theme name used when --theme is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<String>,
    /// Fixed RNG seed used when --seed is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ConfigFile {
    /// Path to the lumen config directory, if the platform has one
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lumen"))
    }

    /// Path to settings.json, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load the config file if it exists and parses; anything else is None.
    pub fn load() -> Option<Self> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(error) => {
                warn!("Ignoring malformed config {}: {}", path.display(), error);
                None
            }
        }
    }

    /// Write a starter settings.json, keeping any existing file untouched.
    pub fn initialize() -> Result<PathBuf> {
        let dir = Self::config_dir().context("No config directory available on this platform")?;
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join("settings.json");
        if path.exists() {
            return Ok(path);
        }
        let starter = Self {
            default_theme: Some(ThemeVariant::default().name().to_string()),
            seed: None,
        };
        let contents = serde_json::to_string_pretty(&starter)?;
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: ConfigFile =
            serde_json::from_str(r#"{ "default_theme": "ember", "seed": 7 }"#).unwrap();
        assert_eq!(config.default_theme.as_deref(), Some("ember"));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn parses_empty_config() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert!(config.default_theme.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn omits_unset_fields_when_serialized() {
        let json = serde_json::to_string(&ConfigFile::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
