//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the swatch application.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::output::OutputFormat;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// The main configuration struct for the swatch application.
///
/// # Examples
///
/// ```
/// use swatch_config::{Config, OutputFormat};
///
/// let config = Config::default();
/// assert!(!config.show_labels);
/// assert_eq!(config.output_format, OutputFormat::Hex);
///
/// let config = Config {
///     show_labels: true,
///     exit_on_choose: true,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Draw each color's name inside its cell.
    #[serde(default)]
    pub show_labels: bool,

    /// Quit as soon as a color is chosen instead of waiting for Enter.
    #[serde(default)]
    pub exit_on_choose: bool,

    /// Format used when printing the chosen color on exit.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default tracing filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_labels: false,
            exit_on_choose: false,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./swatch.json5` or `./swatch.json`
    /// 2. User: `~/.config/swatch/config.json5` or `~/.config/swatch/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// The loaded `log_level` is stored trimmed and lowercased, so it can be
    /// used directly as a tracing filter.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swatch_config::Config;
    ///
    /// # fn example() -> swatch_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        config.validate()?;
        config.log_level = normalize_log_level(&config.log_level);
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `log_level` is not one of
    /// [`LOG_LEVELS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.log_level = "loud".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let level = normalize_log_level(&self.log_level);
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

fn normalize_log_level(level: &str) -> String {
    level.trim().to_ascii_lowercase()
}
