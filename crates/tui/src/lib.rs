//! Terminal UI for the swatch color picker.
//!
//! This crate provides the [`ColorGrid`](grid::ColorGrid) component and a
//! Ratatui-based host that drives it.
//!
//! # Overview
//!
//! - [`grid`]: The color grid: geometry, drawing, and press resolution
//! - [`host`]: Capability traits a host uses to drive a component
//! - [`widgets`]: Ratatui adapters and the status bar
//! - [`app`]: Main application struct and run loop
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use swatch_config::Config;
//! use swatch_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     if let Some(color) = result? {
//!         println!("{}", color.hex());
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod event;
pub mod grid;
pub mod host;
pub mod layout;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use grid::{CellBounds, ColorGrid, ColorListener};
