//! Centralized layout measurements for the TUI.

use crate::grid::{COLUMN_COUNT, ROW_COUNT};

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum terminal width: two columns per grid cell.
pub const MIN_WIDTH: u16 = COLUMN_COUNT as u16 * 2;

/// Minimum terminal height: one row per grid row plus the status bar.
pub const MIN_HEIGHT: u16 = ROW_COUNT as u16 + STATUS_BAR_HEIGHT;
