//! Shared protocol types for the swatch color picker.
//!
//! This crate defines the types used across all swatch components: the
//! fixed color palette, the messages exchanged between the input handler
//! and the application, and error types.
//!
//! # Overview
//!
//! - [`color`]: The `PaletteColor` type and the fixed 8-color [`PALETTE`]
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use swatch_protocol::{PALETTE, PaletteColor};
//!
//! assert_eq!(PALETTE.len(), 8);
//! assert_eq!(PALETTE[1], PaletteColor::Cyan);
//! assert_eq!(PaletteColor::Cyan.hex(), "#00FFFF");
//! ```

pub mod color;
pub mod error;
pub mod message;

// Re-export primary types at crate root for convenience
pub use color::{PALETTE, PaletteColor};
pub use error::{ProtocolError, Result};
pub use message::Message;
