//! Terminal frame and chrome measurements.

use serde::{Deserialize, Serialize};

/// The terminal dimensions the layout is computed for.
///
/// Either dimension may be 0 transiently while the terminal starts up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TerminalFrame {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl TerminalFrame {
    /// Creates a frame from terminal dimensions.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns `true` once both dimensions are known (non-zero).
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::TerminalFrame;
    ///
    /// assert!(!TerminalFrame::new(0, 24).is_known());
    /// assert!(TerminalFrame::new(80, 24).is_known());
    /// ```
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Heights of the fixed, non-content bars around the panes.
///
/// Owned by the presentation layer; the layout engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Chrome {
    /// Height of the header bar.
    pub header: u16,
    /// Height of the command bar.
    pub command_bar: u16,
    /// Height of the status bar.
    pub status_bar: u16,
}

impl Chrome {
    /// Creates chrome measurements.
    #[must_use]
    pub const fn new(header: u16, command_bar: u16, status_bar: u16) -> Self {
        Self {
            header,
            command_bar,
            status_bar,
        }
    }

    /// Returns the combined height of all bars.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::Chrome;
    ///
    /// assert_eq!(Chrome::new(1, 1, 1).total(), 3);
    /// assert_eq!(Chrome::new(u16::MAX, 1, 0).total(), u16::MAX);
    /// ```
    #[must_use]
    pub const fn total(self) -> u16 {
        self.header
            .saturating_add(self.command_bar)
            .saturating_add(self.status_bar)
    }
}
