//! Output format for the chosen color.
//!
//! When the picker exits with a color chosen, the binary prints it to
//! stdout in one of these formats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_protocol::PaletteColor;

use crate::error::ConfigError;

/// How a chosen color is written out.
///
/// # Examples
///
/// ```
/// use swatch_config::OutputFormat;
/// use swatch_protocol::PaletteColor;
///
/// assert_eq!(OutputFormat::Hex.format(PaletteColor::Red), "#FF0000");
/// assert_eq!(OutputFormat::Name.format(PaletteColor::Red), "red");
/// assert_eq!(OutputFormat::Argb.format(PaletteColor::Red), "0xFFFF0000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `#RRGGBB`.
    #[default]
    Hex,
    /// Lowercase color name.
    Name,
    /// Packed `0xAARRGGBB`.
    Argb,
}

impl OutputFormat {
    /// Formats a color.
    #[must_use]
    pub fn format(self, color: PaletteColor) -> String {
        match self {
            Self::Hex => color.hex(),
            Self::Name => color.name().to_string(),
            Self::Argb => format!("0x{:08X}", color.argb()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "name" => Ok(Self::Name),
            "argb" => Ok(Self::Argb),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hex() {
        assert_eq!(OutputFormat::default(), OutputFormat::Hex);
    }

    #[test]
    fn formats_every_style() {
        assert_eq!(OutputFormat::Hex.format(PaletteColor::Cyan), "#00FFFF");
        assert_eq!(OutputFormat::Name.format(PaletteColor::Cyan), "cyan");
        assert_eq!(OutputFormat::Argb.format(PaletteColor::Cyan), "0xFF00FFFF");
        assert_eq!(OutputFormat::Argb.format(PaletteColor::Black), "0xFF000000");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("HEX".parse::<OutputFormat>().unwrap(), OutputFormat::Hex);
        assert_eq!("Name".parse::<OutputFormat>().unwrap(), OutputFormat::Name);
        assert_eq!(" argb ".parse::<OutputFormat>().unwrap(), OutputFormat::Argb);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "rgb".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOutputFormat(ref s) if s == "rgb"));
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&OutputFormat::Argb).unwrap();
        assert_eq!(json, r#""argb""#);
    }
}
