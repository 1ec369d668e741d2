//! swatch - a terminal color picker.
//!
//! Shows a 2x4 grid of colors, lets the user click one, and prints the
//! accepted color to stdout on exit.

mod cli;
mod telemetry;

use clap::Parser;
use swatch_tui::{App, terminal};
use tracing::info;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Held until exit so buffered log lines are flushed
    let _telemetry = telemetry::init_tracing(&config.log_level);
    info!(?config, "starting swatch");

    let output_format = config.output_format;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    let chosen = result?;
    info!(?chosen, "exiting");
    if let Some(color) = chosen {
        println!("{}", output_format.format(color));
    }

    Ok(())
}
