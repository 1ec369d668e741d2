//! Error types for the swatch-protocol crate.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A color name or hex string did not match any palette color.
    #[error("unknown palette color: {0:?}")]
    UnknownColor(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
