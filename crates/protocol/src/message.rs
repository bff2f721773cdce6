//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state, plus the small enums
//! those messages carry.

use serde::{Deserialize, Serialize};

use crate::region::RegionId;

/// Names the split ratio an adjustment acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitTarget {
    /// Share of the terminal width given to the sidebar.
    SidebarWidth,
    /// Share of the sidebar height given to the file browser.
    SidebarSplit,
    /// Share of the request/workflow budget given to the request list.
    WorkflowSplit,
    /// Share of the main area given to the editor.
    EditorSplit,
    /// Share of the response area given to the primary response pane.
    ResponseSplit,
}

impl SplitTarget {
    /// All split targets.
    pub const ALL: [SplitTarget; 5] = [
        Self::SidebarWidth,
        Self::SidebarSplit,
        Self::WorkflowSplit,
        Self::EditorSplit,
        Self::ResponseSplit,
    ];

    /// Returns a short label for status display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SidebarWidth => "sidebar",
            Self::SidebarSplit => "files",
            Self::WorkflowSplit => "requests",
            Self::EditorSplit => "editor",
            Self::ResponseSplit => "compare",
        }
    }
}

/// Direction of a focus cycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDirection {
    /// Towards the end of the cycle order.
    Forward,
    /// Towards the start of the cycle order.
    Backward,
}

/// Which splitter an orientation toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationTarget {
    /// The editor/response split.
    Main,
    /// The primary/secondary response split.
    Response,
}

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update layout and UI state.
///
/// # Examples
///
/// ```
/// use volley_protocol::{FocusDirection, Message};
///
/// let msg = Message::CycleFocus { direction: FocusDirection::Forward };
/// assert!(msg.is_focus());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Escape: close the open overlay or help (contextual).
    Escape,
    /// Toggle help overlay.
    ToggleHelp,
    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    // --- Focus ---
    /// Move focus to the next or previous eligible pane.
    CycleFocus {
        /// Direction of the step.
        direction: FocusDirection,
    },
    /// Focus a specific pane.
    FocusRegion {
        /// The pane to focus.
        region: RegionId,
    },

    // --- Geometry ---
    /// Grow or shrink a split ratio by one step.
    AdjustSplit {
        /// The ratio to adjust.
        target: SplitTarget,
        /// `true` grows the first child, `false` shrinks it.
        grow: bool,
    },
    /// Switch a splitter between stacked and side-by-side.
    ToggleOrientation {
        /// The splitter to toggle.
        target: OrientationTarget,
    },
    /// Collapse or restore a pane.
    ToggleCollapse {
        /// The pane to toggle.
        region: RegionId,
    },
    /// Enable or disable the response compare view.
    ToggleCompare,
    /// Show or hide the workflow list.
    ToggleWorkflows,

    // --- Overlays ---
    /// Open an overlay (history, environment or theme picker).
    OpenOverlay {
        /// The overlay to open.
        region: RegionId,
    },
    /// Close the open overlay.
    CloseOverlay,
    /// Move the selection inside the open overlay.
    OverlayNavigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
}

impl Message {
    /// Returns `true` if this message changes pane focus.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::{Message, RegionId};
    ///
    /// assert!(Message::FocusRegion { region: RegionId::Editor }.is_focus());
    /// assert!(!Message::ToggleCompare.is_focus());
    /// ```
    #[must_use]
    pub fn is_focus(&self) -> bool {
        matches!(self, Self::CycleFocus { .. } | Self::FocusRegion { .. })
    }

    /// Returns `true` if this message can change region geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::{Message, SplitTarget};
    ///
    /// let msg = Message::AdjustSplit { target: SplitTarget::EditorSplit, grow: true };
    /// assert!(msg.is_geometry());
    /// assert!(!Message::ToggleHelp.is_geometry());
    /// ```
    #[must_use]
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            Self::Resize { .. }
                | Self::AdjustSplit { .. }
                | Self::ToggleOrientation { .. }
                | Self::ToggleCollapse { .. }
                | Self::ToggleCompare
                | Self::ToggleWorkflows
        )
    }

    /// Returns `true` if this message acts on an overlay.
    #[must_use]
    pub fn is_overlay(&self) -> bool {
        matches!(
            self,
            Self::OpenOverlay { .. } | Self::CloseOverlay | Self::OverlayNavigate { .. }
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_focus_detection() {
        assert!(
            Message::CycleFocus {
                direction: FocusDirection::Backward
            }
            .is_focus()
        );
        assert!(
            Message::FocusRegion {
                region: RegionId::Files
            }
            .is_focus()
        );
        assert!(!Message::Quit.is_focus());
        assert!(!Message::ToggleCompare.is_focus());
    }

    #[test]
    fn message_geometry_detection() {
        assert!(
            Message::Resize {
                width: 80,
                height: 24
            }
            .is_geometry()
        );
        assert!(
            Message::ToggleOrientation {
                target: OrientationTarget::Main
            }
            .is_geometry()
        );
        assert!(
            Message::ToggleCollapse {
                region: RegionId::Response
            }
            .is_geometry()
        );
        assert!(Message::ToggleWorkflows.is_geometry());
        assert!(!Message::CloseOverlay.is_geometry());
        assert!(!Message::Escape.is_geometry());
    }

    #[test]
    fn message_overlay_detection() {
        assert!(
            Message::OpenOverlay {
                region: RegionId::ThemePicker
            }
            .is_overlay()
        );
        assert!(Message::OverlayNavigate { delta: 1 }.is_overlay());
        assert!(!Message::ToggleHelp.is_overlay());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::CloseOverlay.is_terminating());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::Quit,
            Message::Escape,
            Message::ToggleHelp,
            Message::Resize {
                width: 120,
                height: 40,
            },
            Message::CycleFocus {
                direction: FocusDirection::Forward,
            },
            Message::FocusRegion {
                region: RegionId::Workflows,
            },
            Message::AdjustSplit {
                target: SplitTarget::WorkflowSplit,
                grow: false,
            },
            Message::ToggleOrientation {
                target: OrientationTarget::Response,
            },
            Message::ToggleCollapse {
                region: RegionId::Files,
            },
            Message::ToggleCompare,
            Message::ToggleWorkflows,
            Message::OpenOverlay {
                region: RegionId::History,
            },
            Message::CloseOverlay,
            Message::OverlayNavigate { delta: -1 },
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleCompare).expect("serialize");
        assert_eq!(json, r#""toggle_compare""#);

        let json = serde_json::to_string(&Message::AdjustSplit {
            target: SplitTarget::SidebarWidth,
            grow: true,
        })
        .expect("serialize");
        assert_eq!(
            json,
            r#"{"adjust_split":{"target":"sidebar_width","grow":true}}"#
        );
    }

    #[test]
    fn split_target_labels_are_distinct() {
        let mut labels: Vec<_> = SplitTarget::ALL.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SplitTarget::ALL.len());
    }
}
