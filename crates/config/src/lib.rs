//! Configuration management for the swatch color picker.
//!
//! This crate handles loading, validating, and persisting configuration
//! from configuration files, falling back to built-in defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`output`]: How the chosen color is reported on exit
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./swatch.json5` or `./swatch.json`)
//! 2. User config (`~/.config/swatch/config.json5` or `~/.config/swatch/config.json`)
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Examples
//!
//! ```no_run
//! use swatch_config::Config;
//!
//! # fn example() -> swatch_config::Result<()> {
//! let config = Config::load()?;
//! println!("Labels shown: {}", config.show_labels);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use output::OutputFormat;
