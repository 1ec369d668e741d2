//! Capabilities a host UI drives a component through.
//!
//! A component does not inherit from a host widget type. It implements the
//! subset of [`Resizable`], [`Drawable`] and [`Touchable`] it needs, and the
//! host calls those on its UI thread in response to terminal events.
//!
//! Coordinates passed through these traits are local to the component:
//! `(0, 0)` is its top-left corner regardless of where the host placed it.

use swatch_protocol::PaletteColor;

use crate::grid::CellBounds;

/// A drawing target the host hands to [`Drawable::on_draw`].
pub trait Surface {
    /// Fills `bounds` with a solid color.
    ///
    /// Parts of `bounds` outside the surface are clipped.
    fn fill_rect(&mut self, bounds: CellBounds, color: PaletteColor);
}

/// The phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// The pointer went down (press or touch start).
    Down,
    /// The pointer moved while held down.
    Move,
    /// The pointer was released.
    Up,
}

/// A pointer event in component-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchEvent {
    /// What happened.
    pub action: TouchAction,
    /// Horizontal position; may be negative or past the right edge.
    pub x: i32,
    /// Vertical position; may be negative or past the bottom edge.
    pub y: i32,
}

impl TouchEvent {
    /// Creates a new touch event.
    #[must_use]
    pub const fn new(action: TouchAction, x: i32, y: i32) -> Self {
        Self { action, x, y }
    }

    /// Shorthand for a [`TouchAction::Down`] event.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }
}

/// A component that reacts to size changes.
pub trait Resizable {
    /// Called by the host whenever the component's size changes.
    fn on_size_changed(&mut self, width: i32, height: i32, old_width: i32, old_height: i32);
}

/// A component that can draw itself.
pub trait Drawable {
    /// Draws the component onto `surface`.
    fn on_draw(&self, surface: &mut dyn Surface);
}

/// A component that consumes pointer input.
pub trait Touchable {
    /// Handles a pointer event.
    ///
    /// Returns `true` if the event was consumed.
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool;
}
