//! Pane focus: the active region, emphasis, cycling, and collapse fallback.
//!
//! Focus moves through a fixed cyclic order and only ever rests on a pane
//! that is visible: not collapsed and, for the workflow list, present.

use tracing::{debug, trace};
use volley_protocol::{FocusDirection, RegionId};

use crate::state::CollapseState;

/// Cyclic focus order.
pub const FOCUS_ORDER: [RegionId; 5] = [
    RegionId::Files,
    RegionId::Requests,
    RegionId::Workflows,
    RegionId::Editor,
    RegionId::Response,
];

/// Region focused on first layout.
pub const INITIAL_FOCUS: RegionId = RegionId::Editor;

/// The sidebar pane focus enters when it wraps around from the main area.
const SIDEBAR_HOME: RegionId = RegionId::Requests;

/// Visual emphasis of a region's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// The focused region.
    Active,
    /// Any other region.
    Inactive,
}

/// Returns `true` if `region` may receive focus.
///
/// Only the five panes of [`FOCUS_ORDER`] are focusable. A collapsed pane
/// is not, and neither is the workflow list while no workflows exist.
#[must_use]
pub fn is_focusable(region: RegionId, collapse: &CollapseState, workflows_present: bool) -> bool {
    if !FOCUS_ORDER.contains(&region) || collapse.is_collapsed(region) {
        return false;
    }
    region != RegionId::Workflows || workflows_present
}

fn order_index(region: RegionId) -> Option<usize> {
    FOCUS_ORDER.iter().position(|r| *r == region)
}

/// Tracks which pane is focused.
///
/// # Examples
///
/// ```
/// use volley_layout::focus::{Emphasis, FocusController};
/// use volley_layout::CollapseState;
/// use volley_protocol::{FocusDirection, RegionId};
///
/// let focus = FocusController::new();
/// assert_eq!(focus.current(), RegionId::Editor);
///
/// // Without workflows, focus skips straight from requests to the editor.
/// let collapse = CollapseState::default();
/// let back = focus.cycle(FocusDirection::Backward, &collapse, false);
/// assert_eq!(back.current(), RegionId::Requests);
/// assert_eq!(back.emphasis(RegionId::Requests), Emphasis::Active);
/// assert_eq!(back.emphasis(RegionId::Editor), Emphasis::Inactive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusController {
    current: RegionId,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusController {
    /// Creates a controller focused on the editor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: INITIAL_FOCUS,
        }
    }

    /// Returns the focused region.
    #[must_use]
    pub const fn current(&self) -> RegionId {
        self.current
    }

    /// Returns how `region` should be emphasized.
    #[must_use]
    pub fn emphasis(&self, region: RegionId) -> Emphasis {
        if region == self.current {
            Emphasis::Active
        } else {
            Emphasis::Inactive
        }
    }

    /// Moves focus one eligible step in `direction`, wrapping.
    ///
    /// Ineligible regions are skipped. If nothing else is eligible the
    /// focus stays put.
    #[must_use]
    pub fn cycle(
        &self,
        direction: FocusDirection,
        collapse: &CollapseState,
        workflows_present: bool,
    ) -> Self {
        let len = FOCUS_ORDER.len();
        let start = order_index(self.current).unwrap_or(0);
        for step in 1..=len {
            let index = match direction {
                FocusDirection::Forward => (start + step) % len,
                FocusDirection::Backward => (start + len - step) % len,
            };
            let candidate = FOCUS_ORDER[index];
            if is_focusable(candidate, collapse, workflows_present) {
                trace!(from = %self.current, to = %candidate, "focus cycled");
                return Self { current: candidate };
            }
        }
        *self
    }

    /// Focuses `region` directly, if it is eligible.
    #[must_use]
    pub fn focus(
        &self,
        region: RegionId,
        collapse: &CollapseState,
        workflows_present: bool,
    ) -> Option<Self> {
        is_focusable(region, collapse, workflows_present).then_some(Self { current: region })
    }

    /// Finds where focus goes when `lost` stops being eligible.
    ///
    /// Walks forward from `lost` through the cycle order. Wrapping from the
    /// main area into the sidebar enters at the request list when it is
    /// eligible. Returns `None` if no region is eligible.
    #[must_use]
    pub fn fallback_from(
        lost: RegionId,
        collapse: &CollapseState,
        workflows_present: bool,
    ) -> Option<RegionId> {
        let len = FOCUS_ORDER.len();
        let start = order_index(lost).unwrap_or(len - 1);
        for step in 1..=len {
            let index = (start + step) % len;
            let candidate = FOCUS_ORDER[index];
            if !is_focusable(candidate, collapse, workflows_present) {
                continue;
            }
            let wrapped = start + step >= len;
            if wrapped
                && candidate == RegionId::Files
                && is_focusable(SIDEBAR_HOME, collapse, workflows_present)
            {
                return Some(SIDEBAR_HOME);
            }
            return Some(candidate);
        }
        None
    }

    /// Returns a controller whose focus is eligible under the given
    /// visibility, or `None` if no pane is eligible at all.
    #[must_use]
    pub fn revalidated(&self, collapse: &CollapseState, workflows_present: bool) -> Option<Self> {
        if is_focusable(self.current, collapse, workflows_present) {
            return Some(*self);
        }
        let next = Self::fallback_from(self.current, collapse, workflows_present)?;
        debug!(from = %self.current, to = %next, "focus moved off hidden pane");
        Some(Self { current: next })
    }

    /// Collapses or restores `region` and moves focus off it if needed.
    ///
    /// Returns the new collapse state and controller, or `None` when the
    /// region is not collapsible or collapsing it would leave no pane to
    /// focus.
    #[must_use]
    pub fn set_collapse_state(
        &self,
        collapse: &CollapseState,
        workflows_present: bool,
        region: RegionId,
        collapsed: bool,
    ) -> Option<(CollapseState, Self)> {
        let next = collapse.with(region, collapsed)?;
        match self.revalidated(&next, workflows_present) {
            Some(focus) => Some((next, focus)),
            None => {
                debug!(%region, "refusing collapse that would leave nothing focusable");
                None
            }
        }
    }
}
