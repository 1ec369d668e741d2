//! Logging setup.
//!
//! The terminal belongs to the UI while the picker runs, so logs only go to
//! a file, and only when `SWATCH_LOG` names one. Events are written by a
//! background worker so the UI thread never blocks on file I/O.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
const LOG_FILE_ENV: &str = "SWATCH_LOG";

/// Keeps the log writer alive. Pending events are flushed when dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Installs a file-backed tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. The returned guard is
/// disabled when no log file is configured, the file cannot be opened, or a
/// subscriber is already installed.
pub fn init_tracing(default_level: &str) -> TelemetryGuard {
    let Some(path) = log_file_path_from_env() else {
        return TelemetryGuard::disabled();
    };

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: failed to open log file {}: {}",
                path.display(),
                err
            );
            return TelemetryGuard::disabled();
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard {
        _guard: Some(guard),
    }
}

/// Filter used when `RUST_LOG` is unset or invalid.
fn fallback_filter(default_level: &str) -> EnvFilter {
    EnvFilter::new(default_level)
}

fn log_file_path_from_env() -> Option<PathBuf> {
    log_file_path(std::env::var_os(LOG_FILE_ENV))
}

fn log_file_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use swatch_config::Config;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn unset_or_empty_log_file_disables_logging() {
        assert_eq!(log_file_path(None), None);
        assert_eq!(log_file_path(Some(OsString::new())), None);
    }

    #[test]
    fn log_file_path_is_taken_verbatim() {
        assert_eq!(
            log_file_path(Some(OsString::from("/tmp/swatch.log"))),
            Some(PathBuf::from("/tmp/swatch.log"))
        );
    }

    #[test]
    fn fallback_filter_uses_level() {
        assert_eq!(fallback_filter("info").to_string(), "info");
        assert_eq!(fallback_filter("debug").to_string(), "debug");
    }

    #[test]
    fn padded_config_level_builds_level_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("swatch.json5");
        std::fs::write(&path, r#"{ log_level: " DEBUG " }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(fallback_filter(&config.log_level).to_string(), "debug");
    }
}
