//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the volley application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::LayoutConfig;
use crate::persistence::{find_config_file, load_json5, save_json};

/// The main configuration struct for the volley application.
///
/// # Examples
///
/// ```
/// use volley_config::{Config, LayoutConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.layout, LayoutConfig::default());
///
/// // Create a custom config
/// let config = Config {
///     layout: LayoutConfig {
///         min_sidebar_width: 24,
///         ..Default::default()
///     },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Layout engine bounds and minimums.
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./volley.json5` or `./volley.json`
    /// 2. User: `~/.config/volley/config.json5` or `~/.config/volley/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use volley_config::Config;
    ///
    /// # async fn example() -> volley_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Sidebar starts at {}", config.layout.sidebar_width.default);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = load_json5(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to save to
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        save_json(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any layout bound or minimum is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_config::{Config, RatioBounds};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.layout.editor_split = RatioBounds::new(0.9, 0.2, 0.8);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config, Config::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                layout: {
                    // wider editor by default
                    editor_split: { default: 0.6, min: 0.3, max: 0.8 },
                    adjust_step: 0.1,
                    overlays: {
                        history: { width_ratio: 0.9, height_ratio: 0.9, min_width: 50, min_height: 12 },
                    },
                },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.layout.editor_split.default, 0.6);
        assert_eq!(config.layout.adjust_step, 0.1);
        assert_eq!(config.layout.overlays.history.min_width, 50);
        assert_eq!(config.layout.overlays.theme_picker.min_width, 28);
    }

    #[test]
    fn load_from_rejects_invalid_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"layout": {"adjust_step": 2.0}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config::default();
        original.layout.min_sidebar_width = 22;
        original.layout.main_gap = 2;

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
