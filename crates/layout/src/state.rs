//! Persistent layout state.
//!
//! [`LayoutState`] is an immutable value: every transition returns a new
//! state, and the engine swaps it in at a single point. Boxes are never
//! stored here; they are derived from the state on every recompute.

use volley_config::{LayoutConfig, LayoutPreferences};
use volley_protocol::{FocusDirection, Orientation, RegionId, SplitTarget};

use crate::focus::{Emphasis, FocusController};

/// Which panes are collapsed.
///
/// Only collapsible panes (see [`RegionId::is_collapsible`]) can be set.
///
/// # Examples
///
/// ```
/// use volley_layout::CollapseState;
/// use volley_protocol::RegionId;
///
/// let state = CollapseState::default().with(RegionId::Files, true).unwrap();
/// assert!(state.is_collapsed(RegionId::Files));
/// assert!(CollapseState::default().with(RegionId::History, true).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollapseState {
    collapsed: [bool; RegionId::COUNT],
}

impl CollapseState {
    /// Returns `true` if `region` is collapsed.
    #[must_use]
    pub const fn is_collapsed(&self, region: RegionId) -> bool {
        self.collapsed[region.index()]
    }

    /// Returns a copy with `region` collapsed or restored, or `None` if the
    /// region cannot be collapsed.
    #[must_use]
    pub fn with(&self, region: RegionId, collapsed: bool) -> Option<Self> {
        if !region.is_collapsible() {
            return None;
        }
        let mut next = *self;
        next.collapsed[region.index()] = collapsed;
        Some(next)
    }

    /// Iterates over the collapsed regions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = RegionId> + '_ {
        RegionId::ALL
            .into_iter()
            .filter(|region| self.is_collapsed(*region))
    }
}

/// Ratios, orientations, visibility flags, focus, and the open overlay.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::LayoutState;
/// use volley_protocol::{Orientation, SplitTarget};
///
/// let state = LayoutState::new(&LayoutConfig::default());
/// assert_eq!(state.ratio(SplitTarget::SidebarWidth), 0.20);
/// assert_eq!(state.main_orientation(), Orientation::SideBySide);
///
/// let stacked = state.with_main_orientation(Orientation::Stacked);
/// assert_eq!(stacked.main_orientation(), Orientation::Stacked);
/// assert_eq!(state.main_orientation(), Orientation::SideBySide);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    sidebar_width: f64,
    sidebar_split: f64,
    workflow_split: f64,
    editor_split: f64,
    response_split: f64,
    main_orientation: Orientation,
    response_orientation: Orientation,
    compare_enabled: bool,
    workflows_present: bool,
    collapse: CollapseState,
    focus: FocusController,
    overlay: Option<RegionId>,
}

impl LayoutState {
    /// Creates the first-layout state from configured defaults.
    #[must_use]
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            sidebar_width: config.sidebar_width.default,
            sidebar_split: config.sidebar_split.default,
            workflow_split: config.workflow_split.default,
            editor_split: config.editor_split.default,
            response_split: config.response_split.default,
            main_orientation: Orientation::default(),
            response_orientation: Orientation::default(),
            compare_enabled: false,
            workflows_present: false,
            collapse: CollapseState::default(),
            focus: FocusController::new(),
            overlay: None,
        }
    }

    /// Creates a state from saved preferences, falling back to configured
    /// defaults for anything missing.
    ///
    /// Ratios are clamped into the configured bounds. Collapsed panes are
    /// restored one by one; a collapse that would leave nothing focusable
    /// is skipped.
    #[must_use]
    pub fn from_preferences(config: &LayoutConfig, prefs: &LayoutPreferences) -> Self {
        let prefs = prefs.clamped(config);
        let mut state = Self::new(config);
        for target in SplitTarget::ALL {
            if let Some(value) = prefs.ratio(target) {
                state = state.with_ratio(target, value);
            }
        }
        if let Some(orientation) = prefs.main_orientation {
            state = state.with_main_orientation(orientation);
        }
        if let Some(orientation) = prefs.response_orientation {
            state = state.with_response_orientation(orientation);
        }
        if let Some(enabled) = prefs.compare_enabled {
            state = state.with_compare_enabled(enabled);
        }
        for region in &prefs.collapsed {
            if let Some(next) = state.with_collapsed(*region, true) {
                state = next;
            }
        }
        state
    }

    /// Captures the state worth saving between runs.
    #[must_use]
    pub fn to_preferences(&self) -> LayoutPreferences {
        let mut prefs = LayoutPreferences {
            main_orientation: Some(self.main_orientation),
            response_orientation: Some(self.response_orientation),
            compare_enabled: Some(self.compare_enabled),
            collapsed: self.collapse.iter().collect(),
            ..Default::default()
        };
        for target in SplitTarget::ALL {
            prefs.set_ratio(target, self.ratio(target));
        }
        prefs
    }

    /// Returns the stored ratio for `target`.
    #[must_use]
    pub const fn ratio(&self, target: SplitTarget) -> f64 {
        match target {
            SplitTarget::SidebarWidth => self.sidebar_width,
            SplitTarget::SidebarSplit => self.sidebar_split,
            SplitTarget::WorkflowSplit => self.workflow_split,
            SplitTarget::EditorSplit => self.editor_split,
            SplitTarget::ResponseSplit => self.response_split,
        }
    }

    /// Editor/response orientation.
    #[must_use]
    pub const fn main_orientation(&self) -> Orientation {
        self.main_orientation
    }

    /// Compare view orientation.
    #[must_use]
    pub const fn response_orientation(&self) -> Orientation {
        self.response_orientation
    }

    /// Whether the compare view is enabled.
    #[must_use]
    pub const fn compare_enabled(&self) -> bool {
        self.compare_enabled
    }

    /// Whether a workflow list exists.
    #[must_use]
    pub const fn workflows_present(&self) -> bool {
        self.workflows_present
    }

    /// Collapse flags.
    #[must_use]
    pub const fn collapse(&self) -> &CollapseState {
        &self.collapse
    }

    /// Returns `true` if `region` is collapsed.
    #[must_use]
    pub const fn is_collapsed(&self, region: RegionId) -> bool {
        self.collapse.is_collapsed(region)
    }

    /// Returns `true` if the pane `region` takes part in the tiling.
    ///
    /// The secondary response pane is visible while the response pane is.
    /// Overlays are never panes.
    #[must_use]
    pub fn is_visible(&self, region: RegionId) -> bool {
        match region {
            RegionId::Workflows => self.workflows_present && !self.is_collapsed(region),
            RegionId::ResponseSecondary => !self.is_collapsed(RegionId::Response),
            _ if region.is_pane() => !self.is_collapsed(region),
            _ => false,
        }
    }

    /// Returns `true` if the compare view is drawn.
    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.compare_enabled && self.is_visible(RegionId::Response)
    }

    /// The focus controller.
    #[must_use]
    pub const fn focus_controller(&self) -> &FocusController {
        &self.focus
    }

    /// The focused region.
    #[must_use]
    pub const fn focus(&self) -> RegionId {
        self.focus.current()
    }

    /// How `region` should be emphasized.
    #[must_use]
    pub fn emphasis(&self, region: RegionId) -> Emphasis {
        self.focus.emphasis(region)
    }

    /// The open overlay, if any.
    #[must_use]
    pub const fn overlay(&self) -> Option<RegionId> {
        self.overlay
    }

    /// Returns a copy with `target` set to `value`.
    ///
    /// The value is stored as given; callers clamp it.
    #[must_use]
    pub fn with_ratio(&self, target: SplitTarget, value: f64) -> Self {
        let mut next = self.clone();
        match target {
            SplitTarget::SidebarWidth => next.sidebar_width = value,
            SplitTarget::SidebarSplit => next.sidebar_split = value,
            SplitTarget::WorkflowSplit => next.workflow_split = value,
            SplitTarget::EditorSplit => next.editor_split = value,
            SplitTarget::ResponseSplit => next.response_split = value,
        }
        next
    }

    /// Returns a copy with the given main orientation.
    #[must_use]
    pub fn with_main_orientation(&self, orientation: Orientation) -> Self {
        Self {
            main_orientation: orientation,
            ..self.clone()
        }
    }

    /// Returns a copy with the given compare view orientation.
    #[must_use]
    pub fn with_response_orientation(&self, orientation: Orientation) -> Self {
        Self {
            response_orientation: orientation,
            ..self.clone()
        }
    }

    /// Returns a copy with the compare view enabled or disabled.
    #[must_use]
    pub fn with_compare_enabled(&self, enabled: bool) -> Self {
        Self {
            compare_enabled: enabled,
            ..self.clone()
        }
    }

    /// Returns a copy with the workflow list present or absent.
    ///
    /// Focus is moved off the workflow list when it disappears. If that
    /// leaves no focusable pane, the editor is restored and focused.
    #[must_use]
    pub fn with_workflows_present(&self, present: bool) -> Self {
        let next = Self {
            workflows_present: present,
            ..self.clone()
        };
        next.with_valid_focus()
    }

    /// Returns a copy with `region` collapsed or restored, or `None` when
    /// the region is not collapsible or the collapse would leave nothing
    /// focusable.
    #[must_use]
    pub fn with_collapsed(&self, region: RegionId, collapsed: bool) -> Option<Self> {
        let (collapse, focus) =
            self.focus
                .set_collapse_state(&self.collapse, self.workflows_present, region, collapsed)?;
        Some(Self {
            collapse,
            focus,
            ..self.clone()
        })
    }

    /// Returns a copy with focus moved one eligible step.
    #[must_use]
    pub fn with_focus_cycled(&self, direction: FocusDirection) -> Self {
        Self {
            focus: self
                .focus
                .cycle(direction, &self.collapse, self.workflows_present),
            ..self.clone()
        }
    }

    /// Returns a copy focused on `region`, or `None` if it is not eligible.
    #[must_use]
    pub fn with_focus(&self, region: RegionId) -> Option<Self> {
        let focus = self
            .focus
            .focus(region, &self.collapse, self.workflows_present)?;
        Some(Self {
            focus,
            ..self.clone()
        })
    }

    /// Returns a copy with `overlay` open, or all overlays closed for
    /// `None`. Non-overlay regions close the overlay.
    #[must_use]
    pub fn with_overlay(&self, overlay: Option<RegionId>) -> Self {
        Self {
            overlay: overlay.filter(|r| r.is_overlay()),
            ..self.clone()
        }
    }

    /// Returns a copy whose focus rests on an eligible pane.
    #[must_use]
    pub fn with_valid_focus(&self) -> Self {
        if let Some(focus) = self
            .focus
            .revalidated(&self.collapse, self.workflows_present)
        {
            return Self {
                focus,
                ..self.clone()
            };
        }
        // Nothing is eligible: bring the editor back.
        let collapse = self
            .collapse
            .with(RegionId::Editor, false)
            .unwrap_or(self.collapse);
        Self {
            collapse,
            focus: FocusController::new(),
            ..self.clone()
        }
    }
}
