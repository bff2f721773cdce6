//! Layout orchestration.
//!
//! [`recompute`] is the pure core: it runs the splitters in dependency
//! order (sidebar width, sidebar heights, main split, response split,
//! overlays) and re-validates focus. [`LayoutEngine`] owns the state and
//! is the only place that replaces it.

use tracing::{debug, instrument};
use volley_config::{LayoutConfig, LayoutPreferences};
use volley_protocol::{
    Chrome, FocusDirection, Orientation, OrientationTarget, RegionBox, RegionId, SplitTarget,
    TerminalFrame,
};

use crate::boxes::LayoutBoxes;
use crate::focus::Emphasis;
use crate::geometry::{Degrade, clamp, scaled, settle_ratio, split_span};
use crate::main_split::{MainArea, split_main};
use crate::response_split::{ResponseSplit, split_response};
use crate::sidebar::{SidebarPanes, split_sidebar};
use crate::state::LayoutState;

/// Ratio differences below this are treated as no change.
pub const RATIO_EPSILON: f64 = 1e-6;

/// Result of a split adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AdjustOutcome {
    /// The stored ratio or any box changed.
    pub changed: bool,
    /// The requested ratio was outside its bounds and got clamped.
    pub hit_bound: bool,
}

/// Output of one [`recompute`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Recomputed {
    /// The state with settled ratios and valid focus.
    pub state: LayoutState,
    /// The region boxes.
    pub boxes: LayoutBoxes,
}

/// Computes every region box for `frame`.
///
/// Returns `None` while the frame has a zero dimension. The body height is
/// the frame height minus the chrome, but never less than
/// [`LayoutConfig::min_body_height`]. Running the pass again on its own
/// output state yields the same result.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::{recompute, LayoutState};
/// use volley_protocol::{Chrome, RegionBox, RegionId, TerminalFrame};
///
/// let config = LayoutConfig::default();
/// let state = LayoutState::new(&config);
/// let out = recompute(&config, &state, TerminalFrame::new(120, 60), Chrome::new(1, 1, 1)).unwrap();
///
/// assert_eq!(out.boxes.body_height, 57);
/// assert_eq!(out.boxes.get(RegionId::Editor), Some(RegionBox::new(48, 57)));
/// assert!(recompute(&config, &state, TerminalFrame::new(0, 60), Chrome::default()).is_none());
/// ```
#[must_use]
pub fn recompute(
    config: &LayoutConfig,
    state: &LayoutState,
    frame: TerminalFrame,
    chrome: Chrome,
) -> Option<Recomputed> {
    if !frame.is_known() {
        return None;
    }

    let mut next = state.with_valid_focus();
    let mut boxes = LayoutBoxes::default();
    boxes.body_height = frame
        .height
        .saturating_sub(chrome.total())
        .max(config.min_body_height);
    let body = boxes.body_height;

    let panes = SidebarPanes {
        files: next.is_visible(RegionId::Files),
        requests: next.is_visible(RegionId::Requests),
        workflows: next.is_visible(RegionId::Workflows),
    };
    let editor = next.is_visible(RegionId::Editor);
    let response = next.is_visible(RegionId::Response);

    // Sidebar width
    let (sidebar_width, main_width) = if panes.is_empty() {
        (0, frame.width)
    } else if !editor && !response {
        (frame.width, 0)
    } else {
        let min_main = min_main_width(config, editor, response, next.main_orientation());
        let ratio = next.ratio(SplitTarget::SidebarWidth);
        let (sidebar, main) = split_span(
            frame.width,
            ratio,
            config.min_sidebar_width,
            min_main,
            Degrade::Proportional,
        );
        let settled = settle_ratio(ratio, &config.sidebar_width, frame.width, sidebar);
        next = next.with_ratio(SplitTarget::SidebarWidth, settled);
        (sidebar, main)
    };
    boxes.sidebar_width = sidebar_width;
    boxes.main_width = main_width;

    // Sidebar heights
    if !panes.is_empty() {
        let heights = split_sidebar(
            config,
            body,
            next.ratio(SplitTarget::SidebarSplit),
            next.ratio(SplitTarget::WorkflowSplit),
            panes,
        );
        let sized = |height: Option<u16>| height.map(|h| RegionBox::new(sidebar_width, h));
        boxes.set_opt(RegionId::Files, sized(heights.files));
        boxes.set_opt(RegionId::Requests, sized(heights.requests));
        boxes.set_opt(RegionId::Workflows, sized(heights.workflows));
        next = next
            .with_ratio(SplitTarget::SidebarSplit, heights.sidebar_split)
            .with_ratio(SplitTarget::WorkflowSplit, heights.workflow_split);
    }

    // Editor and response
    let main = split_main(
        config,
        MainArea {
            width: main_width,
            height: body,
            editor,
            response,
        },
        next.ratio(SplitTarget::EditorSplit),
        next.main_orientation(),
    );
    next = next.with_ratio(SplitTarget::EditorSplit, main.editor_split);
    boxes.set_opt(RegionId::Editor, main.editor);

    // Compare view
    if let Some(response_box) = main.response {
        boxes.response_area = Some(response_box);
        let ratio = next.ratio(SplitTarget::ResponseSplit);
        let split = if next.compare_enabled() {
            boxes.compare = Some(next.response_orientation());
            split_response(config, response_box, ratio, next.response_orientation())
        } else {
            ResponseSplit::mirrored(response_box, ratio)
        };
        next = next.with_ratio(SplitTarget::ResponseSplit, split.response_split);
        boxes.set(RegionId::Response, split.primary);
        boxes.set(RegionId::ResponseSecondary, split.secondary);
    }

    // Overlay
    if let Some(overlay) = next.overlay() {
        boxes.set_opt(overlay, overlay_box(config, overlay, frame.width, body));
    }

    Some(Recomputed { state: next, boxes })
}

fn min_main_width(
    config: &LayoutConfig,
    editor: bool,
    response: bool,
    orientation: Orientation,
) -> u16 {
    match (editor, response, orientation) {
        (true, true, Orientation::SideBySide) => config
            .min_editor_width
            .saturating_add(config.min_response_width)
            .saturating_add(config.main_gap),
        (true, true, Orientation::Stacked) => config.min_editor_width.max(config.min_response_width),
        (true, false, _) => config.min_editor_width,
        (false, true, _) => config.min_response_width,
        (false, false, _) => 0,
    }
}

fn overlay_box(config: &LayoutConfig, overlay: RegionId, width: u16, body: u16) -> Option<RegionBox> {
    let size = config.overlays.get(overlay)?;
    let w = clamp(
        scaled(width, size.width_ratio),
        size.min_width.min(width),
        width,
    );
    let h = clamp(
        scaled(body, size.height_ratio),
        size.min_height.min(body),
        body,
    );
    Some(RegionBox::new(w, h))
}

/// Owns the layout state and applies user commands to it.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::LayoutEngine;
/// use volley_protocol::{RegionId, TerminalFrame};
///
/// let mut engine = LayoutEngine::new(LayoutConfig::default());
/// assert!(engine.boxes().is_none());
///
/// engine.resize(TerminalFrame::new(120, 40));
/// let outcome = engine.adjust_editor_split(0.1);
/// assert!(outcome.changed);
/// assert!(!outcome.hit_bound);
/// assert!(engine.boxes().unwrap().get(RegionId::Editor).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    state: LayoutState,
    frame: TerminalFrame,
    chrome: Chrome,
    boxes: Option<LayoutBoxes>,
    last_toggle: Option<ToggleMemory>,
}

/// The state around the most recent orientation toggle.
///
/// Settling against the new axis may rewrite ratios that only that axis
/// clamped. Toggling straight back restores `before` instead of
/// re-settling `after`.
#[derive(Debug, Clone, PartialEq)]
struct ToggleMemory {
    target: OrientationTarget,
    frame: TerminalFrame,
    chrome: Chrome,
    before: LayoutState,
    after: LayoutState,
}

impl LayoutEngine {
    /// Creates an engine with default state for `config`.
    ///
    /// No boxes exist until the first non-empty [`resize`](Self::resize).
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        let state = LayoutState::new(&config);
        Self::with_state(config, state)
    }

    /// Creates an engine with state restored from saved preferences.
    #[must_use]
    pub fn with_preferences(config: LayoutConfig, prefs: &LayoutPreferences) -> Self {
        let state = LayoutState::from_preferences(&config, prefs);
        Self::with_state(config, state)
    }

    /// Creates an engine starting from `state`.
    #[must_use]
    pub fn with_state(config: LayoutConfig, state: LayoutState) -> Self {
        Self {
            config,
            state,
            frame: TerminalFrame::default(),
            chrome: Chrome::default(),
            boxes: None,
            last_toggle: None,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The last known terminal frame.
    #[must_use]
    pub fn frame(&self) -> TerminalFrame {
        self.frame
    }

    /// The chrome in effect.
    #[must_use]
    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    /// Boxes from the last successful recompute.
    #[must_use]
    pub fn boxes(&self) -> Option<&LayoutBoxes> {
        self.boxes.as_ref()
    }

    /// Returns `true` once the frame has both dimensions.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.frame.is_known()
    }

    /// Returns how `region` should be emphasized.
    #[must_use]
    pub fn emphasis(&self, region: RegionId) -> Emphasis {
        self.state.emphasis(region)
    }

    /// Records a new terminal size and recomputes.
    #[instrument(skip(self), level = "debug")]
    pub fn resize(&mut self, frame: TerminalFrame) -> Option<&LayoutBoxes> {
        self.frame = frame;
        self.recompute()
    }

    /// Records new chrome heights and recomputes.
    #[instrument(skip(self), level = "debug")]
    pub fn set_chrome(&mut self, chrome: Chrome) -> Option<&LayoutBoxes> {
        self.chrome = chrome;
        self.recompute()
    }

    /// Recomputes every box from the current state.
    ///
    /// Does nothing and returns `None` while the engine is not ready.
    pub fn recompute(&mut self) -> Option<&LayoutBoxes> {
        if !self.is_ready() {
            return None;
        }
        self.apply(self.state.clone());
        self.boxes.as_ref()
    }

    /// Moves the ratio named by `target` by `delta`, clamped into its
    /// bounds.
    ///
    /// When clamping leaves the ratio where it was, nothing is recomputed
    /// and `changed` is `false`.
    #[instrument(skip(self), level = "debug")]
    pub fn adjust(&mut self, target: SplitTarget, delta: f64) -> AdjustOutcome {
        let bounds = *self.config.bounds(target);
        let current = self.state.ratio(target);
        let candidate = current + delta;
        let clamped = bounds.clamp(candidate);
        let hit_bound = (clamped - candidate).abs() > RATIO_EPSILON;

        if (clamped - current).abs() < RATIO_EPSILON {
            debug!(current, hit_bound, "ratio unchanged");
            return AdjustOutcome {
                changed: false,
                hit_bound,
            };
        }

        let before = self.boxes;
        self.apply(self.state.with_ratio(target, clamped));
        let after = self.state.ratio(target);
        let changed = (after - current).abs() >= RATIO_EPSILON || self.boxes != before;
        debug!(current, after, changed, hit_bound, "ratio adjusted");
        AdjustOutcome { changed, hit_bound }
    }

    /// Grows (`grow = true`) or shrinks `target` by the configured step.
    pub fn step(&mut self, target: SplitTarget, grow: bool) -> AdjustOutcome {
        let step = self.config.adjust_step;
        self.adjust(target, if grow { step } else { -step })
    }

    /// Adjusts the sidebar width ratio.
    pub fn adjust_sidebar_width(&mut self, delta: f64) -> AdjustOutcome {
        self.adjust(SplitTarget::SidebarWidth, delta)
    }

    /// Adjusts the file browser share of the sidebar.
    pub fn adjust_sidebar_split(&mut self, delta: f64) -> AdjustOutcome {
        self.adjust(SplitTarget::SidebarSplit, delta)
    }

    /// Adjusts the request list share of the request/workflow budget.
    pub fn adjust_workflow_split(&mut self, delta: f64) -> AdjustOutcome {
        self.adjust(SplitTarget::WorkflowSplit, delta)
    }

    /// Adjusts the editor share of the main area.
    pub fn adjust_editor_split(&mut self, delta: f64) -> AdjustOutcome {
        self.adjust(SplitTarget::EditorSplit, delta)
    }

    /// Adjusts the primary share of the compare view.
    pub fn adjust_response_split(&mut self, delta: f64) -> AdjustOutcome {
        self.adjust(SplitTarget::ResponseSplit, delta)
    }

    /// Switches the editor/response orientation and returns the new one.
    pub fn toggle_main_orientation(&mut self) -> Orientation {
        self.toggle_orientation(OrientationTarget::Main)
    }

    /// Switches the compare view orientation and returns the new one.
    pub fn toggle_response_orientation(&mut self) -> Orientation {
        self.toggle_orientation(OrientationTarget::Response)
    }

    /// Switches the orientation of `target` and returns the new one.
    ///
    /// Toggling the same target back with nothing else changed in between
    /// restores the previous state, so both toggles together leave every
    /// box where it was.
    #[instrument(skip(self), level = "debug")]
    pub fn toggle_orientation(&mut self, target: OrientationTarget) -> Orientation {
        if let Some(memory) = self.last_toggle.take() {
            let unchanged = memory.target == target
                && memory.frame == self.frame
                && memory.chrome == self.chrome
                && memory.after == self.state;
            if unchanged {
                debug!(?target, "orientation toggled back");
                self.apply(memory.before);
                return match target {
                    OrientationTarget::Main => self.state.main_orientation(),
                    OrientationTarget::Response => self.state.response_orientation(),
                };
            }
        }

        let before = self.state.clone();
        let (next, orientation) = match target {
            OrientationTarget::Main => {
                let o = self.state.main_orientation().toggled();
                (self.state.with_main_orientation(o), o)
            }
            OrientationTarget::Response => {
                let o = self.state.response_orientation().toggled();
                (self.state.with_response_orientation(o), o)
            }
        };
        self.apply(next);
        self.last_toggle = Some(ToggleMemory {
            target,
            frame: self.frame,
            chrome: self.chrome,
            before,
            after: self.state.clone(),
        });
        orientation
    }

    /// Enables or disables the compare view.
    pub fn set_compare_enabled(&mut self, enabled: bool) {
        if self.state.compare_enabled() != enabled {
            self.apply(self.state.with_compare_enabled(enabled));
        }
    }

    /// Records whether a workflow list exists.
    pub fn set_workflows_present(&mut self, present: bool) {
        if self.state.workflows_present() != present {
            self.apply(self.state.with_workflows_present(present));
        }
    }

    /// Collapses or restores a pane.
    ///
    /// Returns `false` if the region is not collapsible or collapsing it
    /// would leave no pane to focus.
    #[instrument(skip(self), level = "debug")]
    pub fn set_collapsed(&mut self, region: RegionId, collapsed: bool) -> bool {
        match self.state.with_collapsed(region, collapsed) {
            Some(next) => {
                self.apply(next);
                true
            }
            None => false,
        }
    }

    /// Flips the collapse flag of a pane. See [`set_collapsed`](Self::set_collapsed).
    pub fn toggle_collapsed(&mut self, region: RegionId) -> bool {
        let collapsed = self.state.is_collapsed(region);
        self.set_collapsed(region, !collapsed)
    }

    /// Moves focus one eligible step and returns the focused region.
    pub fn cycle_focus(&mut self, direction: FocusDirection) -> RegionId {
        self.apply(self.state.with_focus_cycled(direction));
        self.state.focus()
    }

    /// Focuses `region` if it is eligible.
    pub fn focus(&mut self, region: RegionId) -> bool {
        match self.state.with_focus(region) {
            Some(next) => {
                self.apply(next);
                true
            }
            None => false,
        }
    }

    /// Opens an overlay, replacing any open one. Returns `false` for
    /// regions that are not overlays.
    pub fn open_overlay(&mut self, region: RegionId) -> bool {
        if !region.is_overlay() {
            return false;
        }
        self.apply(self.state.with_overlay(Some(region)));
        true
    }

    /// Closes the open overlay. Returns `false` if none was open.
    pub fn close_overlay(&mut self) -> bool {
        if self.state.overlay().is_none() {
            return false;
        }
        self.apply(self.state.with_overlay(None));
        true
    }

    /// The state worth saving between runs.
    #[must_use]
    pub fn preferences(&self) -> LayoutPreferences {
        self.state.to_preferences()
    }

    fn apply(&mut self, next: LayoutState) {
        match recompute(&self.config, &next, self.frame, self.chrome) {
            Some(out) => {
                debug!(
                    width = self.frame.width,
                    height = self.frame.height,
                    body = out.boxes.body_height,
                    sidebar = out.boxes.sidebar_width,
                    main = out.boxes.main_width,
                    focus = %out.state.focus(),
                    "layout recomputed"
                );
                self.state = out.state;
                self.boxes = Some(out.boxes);
            }
            None => self.state = next.with_valid_focus(),
        }
    }
}
