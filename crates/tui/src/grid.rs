//! The color grid component.
//!
//! [`ColorGrid`] divides its area into [`ROW_COUNT`] × [`COLUMN_COUNT`]
//! cells, assigns one [`PALETTE`] color to each cell row by row, and tells a
//! single registered listener which color was pressed.
//!
//! Cell bounds are recomputed wholesale on every size change using integer
//! division, so they always tile the component exactly:
//!
//! ```text
//! cell (row, col) = [col*w/C, (col+1)*w/C) × [row*h/R, (row+1)*h/R)
//! ```
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use swatch_protocol::PaletteColor;
//! use swatch_tui::grid::ColorGrid;
//! use swatch_tui::host::{Resizable, TouchEvent, Touchable};
//!
//! let chosen = Rc::new(Cell::new(None));
//! let slot = Rc::clone(&chosen);
//!
//! let mut grid = ColorGrid::new();
//! grid.init(move |color: PaletteColor| slot.set(Some(color)));
//! grid.on_size_changed(400, 200, 0, 0);
//!
//! assert!(grid.on_touch_event(&TouchEvent::down(150, 50)));
//! assert_eq!(chosen.get(), Some(PaletteColor::Cyan));
//! ```

use std::fmt;

use swatch_protocol::{PALETTE, PaletteColor};
use tracing::debug;

use crate::host::{Drawable, Resizable, Surface, TouchAction, TouchEvent, Touchable};

/// Number of rows in the grid.
pub const ROW_COUNT: usize = 2;

/// Number of columns in the grid.
pub const COLUMN_COUNT: usize = 4;

/// Total number of cells.
pub const GRID_CELL_COUNT: usize = ROW_COUNT * COLUMN_COUNT;

/// A half-open rectangle: `left..right` × `top..bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellBounds {
    /// Left edge, inclusive.
    pub left: i32,
    /// Top edge, inclusive.
    pub top: i32,
    /// Right edge, exclusive.
    pub right: i32,
    /// Bottom edge, exclusive.
    pub bottom: i32,
}

impl CellBounds {
    /// Creates bounds from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns `true` if the bounds cover no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns `true` if `(x, y)` lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Receives the color the user picked.
///
/// Any `FnMut(PaletteColor)` closure is a listener.
pub trait ColorListener {
    /// Called once per press that lands on a cell.
    fn on_color_changed(&mut self, color: PaletteColor);
}

impl<F> ColorListener for F
where
    F: FnMut(PaletteColor),
{
    fn on_color_changed(&mut self, color: PaletteColor) {
        self(color);
    }
}

/// A 2×4 grid of palette colors that reports which one was pressed.
///
/// Until the first size change the grid has no geometry: it draws nothing
/// and ignores presses. Without a listener it also draws nothing.
pub struct ColorGrid {
    listener: Option<Box<dyn ColorListener>>,
    bounds: Option<[CellBounds; GRID_CELL_COUNT]>,
    colors: [PaletteColor; GRID_CELL_COUNT],
    width: i32,
    height: i32,
}

impl ColorGrid {
    /// Creates a grid with no listener and no geometry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listener: None,
            bounds: None,
            colors: PALETTE,
            width: 0,
            height: 0,
        }
    }

    /// Registers `listener` and resets the grid.
    ///
    /// Cell bounds are cleared and computed again on the next size change.
    /// The last known size is kept, so presses are still resolved.
    pub fn init(&mut self, listener: impl ColorListener + 'static) {
        self.listener = Some(Box::new(listener));
        self.bounds = None;
        self.colors = PALETTE;
    }

    /// Replaces the listener without touching the geometry.
    pub fn set_listener(&mut self, listener: impl ColorListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener. The grid stops drawing and handling presses.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Returns `true` if a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Returns the cell bounds, or `None` before the first size change.
    #[must_use]
    pub fn cell_bounds(&self) -> Option<&[CellBounds; GRID_CELL_COUNT]> {
        self.bounds.as_ref()
    }

    /// Returns the color assigned to each cell.
    #[must_use]
    pub fn colors(&self) -> &[PaletteColor; GRID_CELL_COUNT] {
        &self.colors
    }

    /// Returns the last size reported by the host as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns `true` if the grid would draw: geometry is computed and a
    /// listener is registered.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.bounds.is_some() && self.listener.is_some()
    }

    /// Resolves a local coordinate to a cell index using the current size.
    ///
    /// Returns `None` if the size is not positive or the coordinate maps
    /// outside the grid.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<usize> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        cell_index(x, y, self.width, self.height)
    }

    /// Draws every cell in palette order.
    ///
    /// Does nothing until geometry is computed and a listener is registered.
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.listener.is_none() {
            return;
        }
        let Some(bounds) = &self.bounds else {
            return;
        };
        for (cell, color) in bounds.iter().zip(self.colors) {
            surface.fill_rect(*cell, color);
        }
    }

    /// Handles a press and notifies the listener with the pressed color.
    ///
    /// Returns `false` for anything other than [`TouchAction::Down`], when no
    /// listener is registered, or when the size is not positive. Otherwise
    /// returns `true`, even if the coordinate did not resolve to a cell.
    pub fn on_press(&mut self, event: &TouchEvent) -> bool {
        if event.action != TouchAction::Down {
            return false;
        }
        if self.listener.is_none() || self.width <= 0 || self.height <= 0 {
            return false;
        }

        let Some(index) = self.cell_at(event.x, event.y) else {
            return true;
        };
        let color = self.colors[index];
        debug!(index, %color, "color chosen");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_color_changed(color);
        }
        true
    }

    fn calculate_grid(&mut self, width: i32, height: i32) {
        let mut bounds = [CellBounds::default(); GRID_CELL_COUNT];
        for row in 0..ROW_COUNT {
            let top = split(row, height, ROW_COUNT);
            let bottom = split(row + 1, height, ROW_COUNT);
            for column in 0..COLUMN_COUNT {
                let left = split(column, width, COLUMN_COUNT);
                let right = split(column + 1, width, COLUMN_COUNT);
                bounds[row * COLUMN_COUNT + column] = CellBounds::new(left, top, right, bottom);
            }
        }
        self.bounds = Some(bounds);
    }
}

impl Default for ColorGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorGrid")
            .field("has_listener", &self.listener.is_some())
            .field("bounds", &self.bounds)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Resizable for ColorGrid {
    fn on_size_changed(&mut self, width: i32, height: i32, old_width: i32, old_height: i32) {
        debug!(width, height, old_width, old_height, "recomputing color grid");
        self.width = width;
        self.height = height;
        self.calculate_grid(width, height);
    }
}

impl Drawable for ColorGrid {
    fn on_draw(&self, surface: &mut dyn Surface) {
        self.render(surface);
    }
}

impl Touchable for ColorGrid {
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.on_press(event)
    }
}

/// Position of the `n`th boundary when `extent` is split into `parts` bands.
fn split(n: usize, extent: i32, parts: usize) -> i32 {
    // Widened so large extents cannot overflow the product.
    (n as i64 * i64::from(extent) / parts as i64) as i32
}

/// Maps a coordinate to a row-major cell index.
///
/// Division truncates toward zero, so small negative coordinates land in
/// the first row or column. Anything mapping outside `0..GRID_CELL_COUNT`
/// is dropped.
fn cell_index(x: i32, y: i32, width: i32, height: i32) -> Option<usize> {
    let column = i64::from(x) * COLUMN_COUNT as i64 / i64::from(width);
    let row = i64::from(y) * ROW_COUNT as i64 / i64::from(height);
    let index = row * COLUMN_COUNT as i64 + column;
    usize::try_from(index)
        .ok()
        .filter(|&index| index < GRID_CELL_COUNT)
}
