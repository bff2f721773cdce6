//! UI state kept beside the layout engine.
//!
//! Geometry and focus live in the engine. What remains here is the
//! workspace being shown, the help toggle, the overlay cursor, and the
//! one-shot notice displayed in the status bar.

use volley_protocol::{RegionId, SplitTarget, Workspace};

/// A one-shot message shown in the status bar until the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// An adjustment ran into the ratio's bound.
    BoundReached(SplitTarget),
    /// A collapse was refused because it would leave nothing to focus.
    CollapseRefused(RegionId),
    /// The workflow list was requested but the workspace has none.
    NoWorkflows,
    /// The terminal is smaller than the size at which every minimum fits.
    Cramped {
        /// Minimum width in columns.
        width: u16,
        /// Minimum height in rows.
        height: u16,
    },
}

impl Notice {
    /// Returns the text shown for this notice.
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::BoundReached(target) => format!("{} split at its limit", target.label()),
            Self::CollapseRefused(region) => {
                format!("cannot collapse {}: nothing else to focus", region.title())
            }
            Self::NoWorkflows => "no workflows in this workspace".to_string(),
            Self::Cramped { width, height } => {
                format!("terminal below {width}x{height}, panes squeezed")
            }
        }
    }
}

/// The UI state of the application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The workspace whose contents fill the panes.
    pub workspace: Workspace,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Selected row in the open overlay.
    pub overlay_selection: usize,
    /// Status bar notice, cleared by the next action.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Creates a new application state showing `workspace`.
    #[must_use]
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            help_visible: false,
            overlay_selection: 0,
            notice: None,
        }
    }

    /// Toggles the visibility of the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if the help was dismissed.
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the overlay cursor by `delta` rows, clamped to the entries of
    /// `overlay`.
    pub fn navigate_overlay(&mut self, overlay: RegionId, delta: i32) {
        let len = self.workspace.overlay_entries(overlay).len();
        if len == 0 {
            self.overlay_selection = 0;
            return;
        }
        let last = len - 1;
        let current = self.overlay_selection.min(last);
        let step = delta.unsigned_abs() as usize;
        self.overlay_selection = if delta < 0 {
            current.saturating_sub(step)
        } else {
            current.saturating_add(step).min(last)
        };
    }

    /// Puts the overlay cursor back on the first row.
    pub fn reset_overlay_selection(&mut self) {
        self.overlay_selection = 0;
    }
}
