//! Configuration file reading and writing.
//!
//! Files are parsed as JSON5 (which also accepts plain JSON) and written
//! back as pretty-printed JSON.
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./swatch.json5` or `./swatch.json`
//! 2. User: `~/.config/swatch/config.json5` or `~/.config/swatch/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local config file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["swatch.json5", "swatch.json"];

/// Name of the directory under the platform config dir.
const USER_CONFIG_DIR: &str = "swatch";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` otherwise.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir` and then `user_config_root/swatch` for a config file.
fn find_config_file_in(local_dir: &Path, user_config_root: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_root
        .into_iter()
        .flat_map(|root| {
            USER_CONFIG_FILE_NAMES
                .iter()
                .map(move |name| root.join(USER_CONFIG_DIR).join(name))
        });

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use swatch_config::persistence::read_config_file;
/// use swatch_config::Config;
///
/// # fn main() -> swatch_config::Result<()> {
/// let config: Config = read_config_file("swatch.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
