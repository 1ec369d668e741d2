//! Status bar rendering widget.
//!
//! A single footer line showing the chosen color on the left and
//! keybinding hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use swatch_protocol::PaletteColor;

use super::swatch::cell_color;

/// Key hints shown on the right, as (key, description) pairs.
const HINTS: &[(&str, &str)] = &[("Enter", " accept  "), ("q", " quit")];

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// Chosen: ██ cyan #00FFFF               Enter accept  q quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use swatch_protocol::PaletteColor;
/// use swatch_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 60, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some(PaletteColor::Cyan), area, &mut buf);
/// ```
pub fn render_status_bar(chosen: Option<PaletteColor>, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, text)| [Span::styled(*key, key_style), Span::styled(*text, text_style)])
        .collect();
    let hints = Line::from(hints);
    let hints_width = u16::try_from(hints.width()).unwrap_or(u16::MAX);

    let [chosen_area, hints_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

    let chosen_line = match chosen {
        Some(color) => Line::from(vec![
            Span::styled("Chosen: ", text_style),
            Span::styled("  ", Style::default().bg(cell_color(color))),
            Span::styled(format!(" {} {}", color.name(), color.hex()), text_style),
        ]),
        None => Line::from(Span::styled(
            "Click a color",
            Style::default().fg(Color::DarkGray),
        )),
    };

    Paragraph::new(chosen_line).render(chosen_area, buf);
    Paragraph::new(hints)
        .alignment(Alignment::Right)
        .render(hints_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn shows_hint_when_nothing_chosen() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("Click a color"));
        assert!(content.trim_end().ends_with("Enter accept  q quit"));
    }

    #[test]
    fn shows_chosen_color_with_swatch() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(Some(PaletteColor::Magenta), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("Chosen:    magenta #FF00FF"));
        let swatch = buf.cell((8, 0)).expect("cell in bounds");
        assert_eq!(swatch.bg, Color::Rgb(0xFF, 0x00, 0xFF));
    }

    #[test]
    fn hints_are_right_aligned() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(None, area, &mut buf);

        // "Enter accept  q quit" is 20 columns wide
        assert_eq!(buf.cell((40, 0)).map(|c| c.symbol()), Some("E"));
        assert_eq!(buf.cell((40, 0)).map(|c| c.fg), Some(Color::Yellow));
    }
}
