//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI. Pointer coordinates are
/// absolute terminal cells; the application translates them into
/// widget-local coordinates.
///
/// # Examples
///
/// ```
/// use swatch_protocol::Message;
///
/// let msg = Message::Press { column: 3, row: 1 };
/// assert!(msg.is_pointer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Primary button pressed at (column, row).
    Press {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer dragged with the primary button held.
    Drag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Primary button released.
    Release {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// The terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
    /// Accept the current choice and exit.
    Confirm,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message carries pointer coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_protocol::Message;
    ///
    /// assert!(Message::Drag { column: 0, row: 0 }.is_pointer());
    /// assert!(!Message::Quit.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::Press { .. } | Self::Drag { .. } | Self::Release { .. }
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(Message::Confirm.is_terminating());
    /// assert!(!Message::Press { column: 1, row: 1 }.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit | Self::Confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_pointer_detection() {
        assert!(Message::Press { column: 1, row: 2 }.is_pointer());
        assert!(Message::Drag { column: 1, row: 2 }.is_pointer());
        assert!(Message::Release { column: 1, row: 2 }.is_pointer());
        assert!(
            !Message::Resize {
                width: 80,
                height: 24
            }
            .is_pointer()
        );
        assert!(!Message::Confirm.is_pointer());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(Message::Confirm.is_terminating());
        assert!(!Message::Release { column: 0, row: 0 }.is_terminating());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::Quit).expect("serialize");
        assert_eq!(json, r#""quit""#);

        let json = serde_json::to_string(&Message::Press { column: 10, row: 5 }).expect("serialize");
        assert_eq!(json, r#"{"press":{"column":10,"row":5}}"#);
    }
}
