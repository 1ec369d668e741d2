//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use swatch_config::{Config, OutputFormat};

/// Pick a color from a 2x4 palette grid in the terminal.
///
/// Click a cell to choose its color, then press Enter to print it.
/// Press q or Esc to exit without printing.
#[derive(Debug, Parser)]
#[command(name = "swatch", version, about)]
pub struct Cli {
    /// Configuration file to use instead of the default search path.
    #[arg(short, long, value_name = "PATH", env = "SWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Format of the printed color: hex, name, or argb.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Show color names inside the grid cells.
    #[arg(long)]
    pub labels: bool,

    /// Exit as soon as a color is clicked.
    #[arg(short = 'x', long)]
    pub exit_on_choose: bool,
}

impl Cli {
    /// Loads the configuration this invocation asks for.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit or discovered config file cannot be
    /// read or is invalid.
    pub fn load_config(&self) -> swatch_config::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Overrides file settings with flags given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if self.labels {
            config.show_labels = true;
        }
        if self.exit_on_choose {
            config.exit_on_choose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["swatch"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli =
            Cli::try_parse_from(["swatch", "--format", "argb", "--labels", "-x"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.output_format, OutputFormat::Argb);
        assert!(config.show_labels);
        assert!(config.exit_on_choose);
    }

    #[test]
    fn flags_do_not_turn_settings_off() {
        let cli = Cli::try_parse_from(["swatch"]).unwrap();
        let mut config = Config {
            show_labels: true,
            output_format: OutputFormat::Name,
            ..Default::default()
        };
        cli.apply(&mut config);

        assert!(config.show_labels);
        assert_eq!(config.output_format, OutputFormat::Name);
    }

    #[test]
    fn invalid_format_is_rejected() {
        assert!(Cli::try_parse_from(["swatch", "--format", "rgb"]).is_err());
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("swatch.json5");
        std::fs::write(&path, "{ show_labels: true, output_format: 'name' }").unwrap();

        let cli = Cli::try_parse_from([
            "swatch",
            "--config",
            path.to_str().unwrap(),
            "--format",
            "hex",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();

        assert!(config.show_labels);
        assert_eq!(config.output_format, OutputFormat::Hex);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
