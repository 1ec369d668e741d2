//! Ratatui adapter for the color grid.
//!
//! [`BufferSurface`] lets a [`ColorGrid`] draw into a ratatui [`Buffer`]
//! through the host [`Surface`] capability, and [`ColorGridWidget`] wraps
//! the two into a regular ratatui [`Widget`].
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui::widgets::Widget;
//! use swatch_protocol::PaletteColor;
//! use swatch_tui::grid::ColorGrid;
//! use swatch_tui::host::Resizable;
//! use swatch_tui::widgets::ColorGridWidget;
//!
//! let mut grid = ColorGrid::new();
//! grid.init(|_: PaletteColor| {});
//! grid.on_size_changed(32, 4, 0, 0);
//!
//! let area = Rect::new(0, 0, 32, 4);
//! let mut buf = Buffer::empty(area);
//! ColorGridWidget::new(&grid).labels(true).render(area, &mut buf);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use swatch_protocol::PaletteColor;

use crate::grid::{CellBounds, ColorGrid};
use crate::host::{Drawable, Surface};

/// Converts a palette color to a true-color terminal color.
#[must_use]
pub fn cell_color(color: PaletteColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Foreground color that stays readable on top of `color`.
#[must_use]
pub fn label_color(color: PaletteColor) -> Color {
    if color.is_light() {
        Color::Black
    } else {
        Color::White
    }
}

/// A [`Surface`] backed by a region of a ratatui buffer.
///
/// Bounds are interpreted relative to `area` and clipped to it.
#[derive(Debug)]
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    /// Creates a surface drawing into `area` of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Maps local bounds to an absolute, clipped buffer rectangle.
    ///
    /// Returns `None` if nothing of `bounds` is visible.
    #[must_use]
    pub fn to_absolute(&self, bounds: CellBounds) -> Option<Rect> {
        let clamp_x = |v: i32| v.clamp(0, i32::from(self.area.width));
        let clamp_y = |v: i32| v.clamp(0, i32::from(self.area.height));
        let clipped = CellBounds::new(
            clamp_x(bounds.left),
            clamp_y(bounds.top),
            clamp_x(bounds.right),
            clamp_y(bounds.bottom),
        );
        if clipped.is_empty() {
            return None;
        }

        // Clamped values fit in u16 because they are within the area.
        Some(Rect::new(
            self.area.x + clipped.left as u16,
            self.area.y + clipped.top as u16,
            clipped.width() as u16,
            clipped.height() as u16,
        ))
    }
}

impl Surface for BufferSurface<'_> {
    fn fill_rect(&mut self, bounds: CellBounds, color: PaletteColor) {
        if let Some(rect) = self.to_absolute(bounds) {
            self.buf.set_style(rect, Style::default().bg(cell_color(color)));
        }
    }
}

/// Renders a [`ColorGrid`] as a ratatui widget.
///
/// The grid is drawn through its [`Drawable`] capability, so nothing is
/// drawn until the grid has geometry and a listener.
#[derive(Debug, Clone, Copy)]
pub struct ColorGridWidget<'a> {
    grid: &'a ColorGrid,
    labels: bool,
}

impl<'a> ColorGridWidget<'a> {
    /// Creates a widget for `grid` without labels.
    #[must_use]
    pub fn new(grid: &'a ColorGrid) -> Self {
        Self {
            grid,
            labels: false,
        }
    }

    /// Draws each color's name centered in its cell.
    #[must_use]
    pub fn labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }
}

impl Widget for ColorGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area);
        self.grid.on_draw(&mut surface);

        if !self.labels || !self.grid.is_ready() {
            return;
        }
        let Some(bounds) = self.grid.cell_bounds() else {
            return;
        };
        for (cell, color) in bounds.iter().zip(self.grid.colors()) {
            if let Some(rect) = surface.to_absolute(*cell) {
                render_label(*color, rect, surface.buf);
            }
        }
    }
}

/// Writes the color name centered in `rect`, truncated to fit.
fn render_label(color: PaletteColor, rect: Rect, buf: &mut Buffer) {
    let name = color.name();
    let name_width = u16::try_from(name.len()).unwrap_or(u16::MAX);
    let x = rect.x + rect.width.saturating_sub(name_width) / 2;
    let y = rect.y + rect.height / 2;
    let style = Style::default().fg(label_color(color)).bg(cell_color(color));
    buf.set_stringn(x, y, name, usize::from(rect.width), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Resizable;

    fn ready_grid(width: i32, height: i32) -> ColorGrid {
        let mut grid = ColorGrid::new();
        grid.init(|_: PaletteColor| {});
        grid.on_size_changed(width, height, 0, 0);
        grid
    }

    #[test]
    fn cell_color_is_true_color() {
        assert_eq!(cell_color(PaletteColor::Red), Color::Rgb(255, 0, 0));
        assert_eq!(cell_color(PaletteColor::Cyan), Color::Rgb(0, 255, 255));
    }

    #[test]
    fn label_color_contrasts() {
        assert_eq!(label_color(PaletteColor::White), Color::Black);
        assert_eq!(label_color(PaletteColor::Blue), Color::White);
    }

    #[test]
    fn to_absolute_offsets_and_clips() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        let surface = BufferSurface::new(&mut buf, Rect::new(5, 2, 10, 4));

        assert_eq!(
            surface.to_absolute(CellBounds::new(1, 1, 3, 2)),
            Some(Rect::new(6, 3, 2, 1))
        );
        assert_eq!(
            surface.to_absolute(CellBounds::new(-4, -4, 100, 100)),
            Some(Rect::new(5, 2, 10, 4))
        );
        assert_eq!(surface.to_absolute(CellBounds::new(10, 0, 12, 2)), None);
        assert_eq!(surface.to_absolute(CellBounds::new(2, 2, 2, 3)), None);
    }

    #[test]
    fn fill_rect_sets_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);

        surface.fill_rect(CellBounds::new(0, 0, 2, 1), PaletteColor::Green);

        assert_eq!(buf.cell((1, 0)).map(|c| c.bg), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(buf.cell((2, 0)).map(|c| c.bg), Some(Color::Reset));
        assert_eq!(buf.cell((0, 1)).map(|c| c.bg), Some(Color::Reset));
    }

    #[test]
    fn widget_fills_every_cell() {
        let grid = ready_grid(8, 2);
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        ColorGridWidget::new(&grid).render(area, &mut buf);

        let row = |y: u16| -> Vec<Color> {
            (0..8)
                .map(|x| buf.cell((x, y)).map_or(Color::Reset, |c| c.bg))
                .collect()
        };
        let expect = |colors: [PaletteColor; 4]| -> Vec<Color> {
            colors.iter().flat_map(|c| [cell_color(*c); 2]).collect()
        };
        assert_eq!(
            row(0),
            expect([
                PaletteColor::Red,
                PaletteColor::Cyan,
                PaletteColor::Blue,
                PaletteColor::Green
            ])
        );
        assert_eq!(
            row(1),
            expect([
                PaletteColor::Magenta,
                PaletteColor::Yellow,
                PaletteColor::Black,
                PaletteColor::White
            ])
        );
    }

    #[test]
    fn widget_respects_area_offset() {
        let grid = ready_grid(4, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        ColorGridWidget::new(&grid).render(Rect::new(3, 2, 4, 2), &mut buf);

        assert_eq!(buf.cell((2, 2)).map(|c| c.bg), Some(Color::Reset));
        assert_eq!(buf.cell((3, 2)).map(|c| c.bg), Some(cell_color(PaletteColor::Red)));
        assert_eq!(buf.cell((6, 3)).map(|c| c.bg), Some(cell_color(PaletteColor::White)));
    }

    #[test]
    fn widget_draws_nothing_before_resize() {
        let mut grid = ColorGrid::new();
        grid.init(|_: PaletteColor| {});
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        ColorGridWidget::new(&grid).labels(true).render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn label_uses_contrasting_foreground() {
        let grid = ready_grid(32, 2);
        let area = Rect::new(0, 0, 32, 2);
        let mut buf = Buffer::empty(area);

        ColorGridWidget::new(&grid).labels(true).render(area, &mut buf);

        // "red" starts at column 2 of the first 8-wide cell
        let r = buf.cell((2, 0)).expect("cell in bounds");
        assert_eq!(r.symbol(), "r");
        assert_eq!(r.fg, Color::White);
        assert_eq!(r.bg, cell_color(PaletteColor::Red));

        // "white" starts at column 25
        let w = buf.cell((25, 1)).expect("cell in bounds");
        assert_eq!(w.symbol(), "w");
        assert_eq!(w.fg, Color::Black);
    }

    #[test]
    fn labels_truncate_in_narrow_cells() {
        let grid = ready_grid(8, 2);
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        ColorGridWidget::new(&grid).labels(true).render(area, &mut buf);

        let first_row: String = (0..8)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(first_row, "recyblgr");
    }
}
