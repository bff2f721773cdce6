//! Region identifiers, boxes, and split orientation.
//!
//! This module defines the logical regions of the workbench UI and the
//! [`RegionBox`] value the layout engine produces for each of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical area of the UI.
///
/// Pane regions tile the body of the screen; overlay regions float above
/// it while open.
///
/// # Examples
///
/// ```
/// use volley_protocol::RegionId;
///
/// assert!(RegionId::Editor.is_pane());
/// assert!(RegionId::History.is_overlay());
/// assert_eq!(RegionId::ResponseSecondary.name(), "response_secondary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    /// The file browser at the top of the sidebar.
    Files,
    /// The request list below the file browser.
    Requests,
    /// The optional workflow list at the bottom of the sidebar.
    Workflows,
    /// The request editor.
    Editor,
    /// The response viewer (primary pane when comparing).
    Response,
    /// The secondary response pane of the compare view.
    ResponseSecondary,
    /// The request history overlay.
    History,
    /// The environment picker overlay.
    EnvironmentPicker,
    /// The theme picker overlay.
    ThemePicker,
}

impl RegionId {
    /// Number of regions.
    pub const COUNT: usize = 9;

    /// All regions, in declaration order.
    pub const ALL: [RegionId; Self::COUNT] = [
        Self::Files,
        Self::Requests,
        Self::Workflows,
        Self::Editor,
        Self::Response,
        Self::ResponseSecondary,
        Self::History,
        Self::EnvironmentPicker,
        Self::ThemePicker,
    ];

    /// Returns the position of this region in [`RegionId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the snake_case name of this region.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Requests => "requests",
            Self::Workflows => "workflows",
            Self::Editor => "editor",
            Self::Response => "response",
            Self::ResponseSecondary => "response_secondary",
            Self::History => "history",
            Self::EnvironmentPicker => "environment_picker",
            Self::ThemePicker => "theme_picker",
        }
    }

    /// Returns a human-readable title for pane borders and overlays.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Files => "Files",
            Self::Requests => "Requests",
            Self::Workflows => "Workflows",
            Self::Editor => "Editor",
            Self::Response => "Response",
            Self::ResponseSecondary => "Compare",
            Self::History => "History",
            Self::EnvironmentPicker => "Environments",
            Self::ThemePicker => "Themes",
        }
    }

    /// Returns `true` for regions that tile the body of the screen.
    #[must_use]
    pub const fn is_pane(self) -> bool {
        !self.is_overlay()
    }

    /// Returns `true` for the transient overlay regions.
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(
            self,
            Self::History | Self::EnvironmentPicker | Self::ThemePicker
        )
    }

    /// Returns `true` for the regions a user may collapse.
    ///
    /// The secondary response pane follows the compare view instead, and
    /// overlays are opened and closed rather than collapsed.
    #[must_use]
    pub const fn is_collapsible(self) -> bool {
        matches!(
            self,
            Self::Files | Self::Requests | Self::Workflows | Self::Editor | Self::Response
        )
    }

    /// Returns `true` for the regions that live in the sidebar.
    #[must_use]
    pub const fn is_sidebar(self) -> bool {
        matches!(self, Self::Files | Self::Requests | Self::Workflows)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete size of a region in character cells.
///
/// A box is never empty: both dimensions are at least 1.
///
/// # Examples
///
/// ```
/// use volley_protocol::RegionBox;
///
/// let b = RegionBox::new(0, 12);
/// assert_eq!(b.width, 1);
/// assert_eq!(b.height, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionBox {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl RegionBox {
    /// Creates a box, flooring both dimensions at 1.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Returns the number of cells covered by this box.
    #[must_use]
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

impl fmt::Display for RegionBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The axis along which a splitter divides its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children are placed one above the other; height is divided.
    Stacked,
    /// Children are placed next to each other; width is divided.
    #[default]
    SideBySide,
}

impl Orientation {
    /// Returns the other orientation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Stacked => Self::SideBySide,
            Self::SideBySide => Self::Stacked,
        }
    }

    /// Returns a short label for status display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::SideBySide => "side-by-side",
        }
    }
}
