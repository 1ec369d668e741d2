//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Trailing whitespace is trimmed from each line for cleaner snapshots.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
