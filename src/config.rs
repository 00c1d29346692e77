//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// The next mode in the cycle Auto -> Dark -> Light -> Auto.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Auto => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
        }
    }

    /// Short name shown in the status bar after switching.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Default portfolio content file used when no path is given on
    /// the command line. When unset the embedded starter content is
    /// used instead.
    pub content: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Display the help overlay on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Skip the reveal transition: sections still reveal on first
    /// sight but appear settled immediately
    #[serde(default)]
    pub reduce_motion: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyFolio/config.toml`
/// - macOS: `~/Library/Application Support/LazyFolio/config.toml`
/// - Windows: `%APPDATA%\LazyFolio\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/LazyFolio/`
    /// - macOS: `~/Library/Application Support/LazyFolio/`
    /// - Windows: `%APPDATA%\LazyFolio\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("LazyFolio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that the configured content file exists when one is set.
    pub fn validate(&self) -> Result<()> {
        if let Some(content_path) = &self.paths.content {
            if !content_path.exists() {
                anyhow::bail!(
                    "Configured content file does not exist: {}",
                    content_path.display()
                );
            }
            if !content_path.is_file() {
                anyhow::bail!(
                    "Configured content path is not a file: {}",
                    content_path.display()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.content, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.ui.reduce_motion);
        assert!(!config.ui.show_help_on_startup);
    }

    #[test]
    fn test_config_validate_defaults() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_content_path() {
        let temp_dir = TempDir::new().unwrap();
        let content_path = temp_dir.path().join("portfolio.toml");

        let mut config = Config::new();
        config.paths.content = Some(content_path.clone());

        // Missing file fails validation
        assert!(config.validate().is_err());

        fs::write(&content_path, "").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_content_path_is_directory() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        config.paths.content = Some(temp_dir.path().to_path_buf());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.reduce_motion = true;

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_parses_partial_file() {
        // Older config files without newer keys still load.
        let loaded: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Light);
        assert!(!loaded.ui.reduce_motion);
        assert_eq!(loaded.paths.content, None);
    }

    #[test]
    fn test_theme_mode_cycle() {
        assert_eq!(ThemeMode::Auto.cycle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.cycle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.cycle(), ThemeMode::Auto);
    }
}
