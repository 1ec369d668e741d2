//! Widget components for the swatch TUI.
//!
//! Each widget renders state into a ratatui buffer, which keeps them easy
//! to test in isolation.
//!
//! # Modules
//!
//! - [`swatch`]: The color grid adapter ([`BufferSurface`], [`ColorGridWidget`])
//! - [`status_bar`]: The footer showing the chosen color and key hints
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use swatch_tui::widgets;
//!
//! let area = Rect::new(0, 0, 40, 1);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_status_bar(None, area, &mut buf);
//! ```

pub mod status_bar;
pub mod swatch;

// Re-export primary rendering items for convenience
pub use status_bar::render_status_bar;
pub use swatch::{BufferSurface, ColorGridWidget, cell_color, label_color};
