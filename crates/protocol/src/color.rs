//! Palette colors for the color grid.
//!
//! The palette is a fixed, ordered list of eight opaque colors. Its order is
//! significant: the color grid assigns `PALETTE[i]` to cell `i`, filling the
//! grid row by row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A color that can be chosen from the grid.
///
/// # Examples
///
/// ```
/// use swatch_protocol::PaletteColor;
///
/// let color: PaletteColor = "magenta".parse().unwrap();
/// assert_eq!(color.argb(), 0xFFFF_00FF);
/// assert_eq!(color.rgb(), (0xFF, 0x00, 0xFF));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    /// Pure red.
    Red,
    /// Cyan (green + blue).
    Cyan,
    /// Pure blue.
    Blue,
    /// Pure green.
    Green,
    /// Magenta (red + blue).
    Magenta,
    /// Yellow (red + green).
    Yellow,
    /// Black.
    Black,
    /// White.
    White,
}

/// The fixed palette, in grid order.
///
/// Cells are numbered row-major, so the first row of a 2×4 grid holds
/// red, cyan, blue, green and the second magenta, yellow, black, white.
pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor::Red,
    PaletteColor::Cyan,
    PaletteColor::Blue,
    PaletteColor::Green,
    PaletteColor::Magenta,
    PaletteColor::Yellow,
    PaletteColor::Black,
    PaletteColor::White,
];

impl PaletteColor {
    /// Returns the color as a packed, fully opaque `0xAARRGGBB` value.
    #[must_use]
    pub const fn argb(self) -> u32 {
        match self {
            Self::Red => 0xFFFF_0000,
            Self::Cyan => 0xFF00_FFFF,
            Self::Blue => 0xFF00_00FF,
            Self::Green => 0xFF00_FF00,
            Self::Magenta => 0xFFFF_00FF,
            Self::Yellow => 0xFFFF_FF00,
            Self::Black => 0xFF00_0000,
            Self::White => 0xFFFF_FFFF,
        }
    }

    /// Returns the red, green and blue components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        let argb = self.argb();
        (
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
        )
    }

    /// Returns the lowercase English name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_protocol::PaletteColor;
    ///
    /// assert_eq!(PaletteColor::Yellow.hex(), "#FFFF00");
    /// ```
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:06X}", self.argb() & 0x00FF_FFFF)
    }

    /// Returns `true` if dark text reads better than light text on this color.
    ///
    /// Uses the integer approximation of perceived luminance
    /// (`0.299 R + 0.587 G + 0.114 B`).
    #[must_use]
    pub const fn is_light(self) -> bool {
        let (r, g, b) = self.rgb();
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        luma >= 128_000
    }

    /// Returns the position of this color in [`PALETTE`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = ProtocolError;

    /// Parses a color name (case-insensitive) or a `#RRGGBB` hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PALETTE
            .iter()
            .copied()
            .find(|color| {
                color.name().eq_ignore_ascii_case(trimmed)
                    || color.hex().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ProtocolError::UnknownColor(s.to_string()))
    }
}
