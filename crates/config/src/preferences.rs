//! Persisted layout preferences.
//!
//! The layout a user arrives at (ratios, orientations, compare view,
//! collapsed panes) is saved on exit and restored on the next start.

use std::path::Path;

use serde::{Deserialize, Serialize};
use volley_protocol::{Orientation, RegionId, SplitTarget};

use crate::error::Result;
use crate::layout::LayoutConfig;
use crate::persistence::{load_json5, preferences_path, save_json};

/// Session layout state saved between runs.
///
/// Every field is optional; missing values fall back to the configured
/// defaults.
///
/// # Examples
///
/// ```
/// use volley_config::{LayoutConfig, LayoutPreferences};
/// use volley_protocol::SplitTarget;
///
/// let mut prefs = LayoutPreferences::default();
/// prefs.set_ratio(SplitTarget::EditorSplit, 0.95);
///
/// let restored = prefs.clamped(&LayoutConfig::default());
/// assert_eq!(restored.ratio(SplitTarget::EditorSplit), Some(0.80));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPreferences {
    /// Sidebar width ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<f64>,
    /// File browser share of the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_split: Option<f64>,
    /// Request list share of the request/workflow budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_split: Option<f64>,
    /// Editor share of the main area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_split: Option<f64>,
    /// Primary share of the compare view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_split: Option<f64>,

    /// Editor/response orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_orientation: Option<Orientation>,
    /// Compare view orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_orientation: Option<Orientation>,
    /// Whether the compare view was open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_enabled: Option<bool>,

    /// Panes that were collapsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collapsed: Vec<RegionId>,
}

impl LayoutPreferences {
    /// Loads preferences from the default location.
    ///
    /// A missing file yields empty preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the home directory cannot be determined.
    pub fn load() -> Result<Self> {
        let path = preferences_path()?;
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads preferences from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        load_json5(path)
    }

    /// Saves preferences to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(preferences_path()?)
    }

    /// Saves preferences to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(path, self)
    }

    /// Returns the stored ratio for `target`.
    #[must_use]
    pub fn ratio(&self, target: SplitTarget) -> Option<f64> {
        match target {
            SplitTarget::SidebarWidth => self.sidebar_width,
            SplitTarget::SidebarSplit => self.sidebar_split,
            SplitTarget::WorkflowSplit => self.workflow_split,
            SplitTarget::EditorSplit => self.editor_split,
            SplitTarget::ResponseSplit => self.response_split,
        }
    }

    /// Stores a ratio for `target`.
    pub fn set_ratio(&mut self, target: SplitTarget, value: f64) {
        let slot = match target {
            SplitTarget::SidebarWidth => &mut self.sidebar_width,
            SplitTarget::SidebarSplit => &mut self.sidebar_split,
            SplitTarget::WorkflowSplit => &mut self.workflow_split,
            SplitTarget::EditorSplit => &mut self.editor_split,
            SplitTarget::ResponseSplit => &mut self.response_split,
        };
        *slot = Some(value);
    }

    /// Returns `true` if `region` was saved as collapsed.
    #[must_use]
    pub fn is_collapsed(&self, region: RegionId) -> bool {
        self.collapsed.contains(&region)
    }

    /// Returns a copy with every ratio clamped into the configured bounds
    /// and non-collapsible regions dropped from the collapsed list.
    #[must_use]
    pub fn clamped(&self, config: &LayoutConfig) -> Self {
        let mut out = self.clone();
        for target in SplitTarget::ALL {
            if let Some(value) = self.ratio(target) {
                out.set_ratio(target, config.bounds(target).clamp(value));
            }
        }
        out.collapsed.retain(|r| r.is_collapsible());
        out.collapsed.sort_unstable();
        out.collapsed.dedup();
        out
    }
}
