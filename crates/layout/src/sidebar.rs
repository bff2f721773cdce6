//! Vertical division of the sidebar.
//!
//! The sidebar stacks up to three bordered panes: the file browser, the
//! request list, and the workflow list. Borders are fixed; only content
//! rows are divided by ratio.

use tracing::trace;
use volley_config::LayoutConfig;

use crate::geometry::{Degrade, settle_ratio, split_span};

/// Which sidebar panes take part in the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarPanes {
    /// File browser.
    pub files: bool,
    /// Request list.
    pub requests: bool,
    /// Workflow list.
    pub workflows: bool,
}

impl SidebarPanes {
    /// Number of visible panes.
    #[must_use]
    pub fn count(&self) -> u16 {
        u16::from(self.files) + u16::from(self.requests) + u16::from(self.workflows)
    }

    /// Returns `true` if no sidebar pane is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Outer heights of the visible sidebar panes plus the settled ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarHeights {
    /// File browser height, if visible.
    pub files: Option<u16>,
    /// Request list height, if visible.
    pub requests: Option<u16>,
    /// Workflow list height, if visible.
    pub workflows: Option<u16>,
    /// File browser share, settled against the realized split.
    pub sidebar_split: f64,
    /// Request list share, settled against the realized split.
    pub workflow_split: f64,
}

impl SidebarHeights {
    /// Sum of the visible outer heights.
    #[must_use]
    pub fn total(&self) -> u32 {
        [self.files, self.requests, self.workflows]
            .into_iter()
            .flatten()
            .map(u32::from)
            .sum()
    }
}

/// Divides `height` rows among the visible sidebar panes.
///
/// Every visible pane gets [`LayoutConfig::pane_border`] rows of border on
/// top of its content. With all three panes visible, the file browser
/// takes `sidebar_split` of the content rows and the request list takes
/// `workflow_split` of the rest; the request/workflow budget is held to
/// twice the request minimum. With two panes, the ratio governing their
/// boundary applies alone. When the minimums do not fit, three panes share
/// the content rows evenly and two panes take halves.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::sidebar::{split_sidebar, SidebarPanes};
///
/// let panes = SidebarPanes { files: true, requests: true, workflows: false };
/// let heights = split_sidebar(&LayoutConfig::default(), 57, 0.5, 0.5, panes);
/// assert_eq!(heights.files, Some(29));
/// assert_eq!(heights.requests, Some(28));
/// assert_eq!(heights.workflows, None);
/// ```
#[must_use]
pub fn split_sidebar(
    config: &LayoutConfig,
    height: u16,
    sidebar_split: f64,
    workflow_split: f64,
    panes: SidebarPanes,
) -> SidebarHeights {
    let border = config.pane_border;
    let padding = border.saturating_mul(panes.count());
    let available = height.saturating_sub(padding);

    let mut out = SidebarHeights {
        files: None,
        requests: None,
        workflows: None,
        sidebar_split,
        workflow_split,
    };

    let (files, requests, workflows) = match (panes.files, panes.requests, panes.workflows) {
        (true, true, true) => {
            let min_budget = config.min_requests_height.saturating_mul(2);
            let fits = u32::from(config.min_files_height) + u32::from(min_budget)
                <= u32::from(available);
            let (files, requests, workflows) = if fits {
                let (files, rest) = split_span(
                    available,
                    sidebar_split,
                    config.min_files_height,
                    min_budget,
                    Degrade::Even,
                );
                let (requests, workflows) = split_span(
                    rest,
                    workflow_split,
                    config.min_requests_height,
                    config.min_workflow_height,
                    Degrade::Even,
                );
                (files, requests, workflows)
            } else {
                even_thirds(available)
            };
            let rest = available - files;
            out.sidebar_split = settle_ratio(sidebar_split, &config.sidebar_split, available, files);
            out.workflow_split = settle_ratio(workflow_split, &config.workflow_split, rest, requests);
            (Some(files), Some(requests), Some(workflows))
        }
        (true, true, false) => {
            let (files, requests) = split_span(
                available,
                sidebar_split,
                config.min_files_height,
                config.min_requests_height,
                Degrade::Even,
            );
            out.sidebar_split = settle_ratio(sidebar_split, &config.sidebar_split, available, files);
            (Some(files), Some(requests), None)
        }
        (true, false, true) => {
            let (files, workflows) = split_span(
                available,
                sidebar_split,
                config.min_files_height,
                config.min_workflow_height,
                Degrade::Even,
            );
            out.sidebar_split = settle_ratio(sidebar_split, &config.sidebar_split, available, files);
            (Some(files), None, Some(workflows))
        }
        (false, true, true) => {
            let (requests, workflows) = split_span(
                available,
                workflow_split,
                config.min_requests_height,
                config.min_workflow_height,
                Degrade::Even,
            );
            out.workflow_split = settle_ratio(workflow_split, &config.workflow_split, available, requests);
            (None, Some(requests), Some(workflows))
        }
        (true, false, false) => (Some(available), None, None),
        (false, true, false) => (None, Some(available), None),
        (false, false, true) => (None, None, Some(available)),
        (false, false, false) => (None, None, None),
    };

    out.files = files.map(|rows| rows.saturating_add(border));
    out.requests = requests.map(|rows| rows.saturating_add(border));
    out.workflows = workflows.map(|rows| rows.saturating_add(border));

    trace!(
        height,
        available,
        files = ?out.files,
        requests = ?out.requests,
        workflows = ?out.workflows,
        "sidebar split"
    );
    out
}

/// Deals `rows` out in equal shares, earlier panes taking the remainder.
fn even_thirds(rows: u16) -> (u16, u16, u16) {
    let share = rows / 3;
    let extra = rows % 3;
    (
        share + u16::from(extra > 0),
        share + u16::from(extra > 1),
        share,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: SidebarPanes = SidebarPanes {
        files: true,
        requests: true,
        workflows: true,
    };

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn three_panes_split_by_both_ratios() {
        // 60 - 6 border rows = 54 content; files 27, rest 27 -> 14 / 13
        let heights = split_sidebar(&config(), 60, 0.5, 0.5, ALL);
        assert_eq!(heights.files, Some(29));
        assert_eq!(heights.requests, Some(16));
        assert_eq!(heights.workflows, Some(15));
        assert_eq!(heights.total(), 60);
        assert_eq!(heights.sidebar_split, 0.5);
        assert_eq!(heights.workflow_split, 0.5);
    }

    #[test]
    fn files_share_leaves_room_for_request_budget() {
        // 20 - 6 = 14 content; 0.8 asks for 11 files rows but the
        // request/workflow budget keeps 4
        let heights = split_sidebar(&config(), 20, 0.8, 0.5, ALL);
        assert_eq!(heights.files, Some(12));
        assert_eq!(heights.requests, Some(4));
        assert_eq!(heights.workflows, Some(4));
        assert_eq!(heights.total(), 20);
        assert!((heights.sidebar_split - 10.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn even_fallback_when_minimums_do_not_fit() {
        // 9 - 6 = 3 content rows cannot hold 2 + 4
        let heights = split_sidebar(&config(), 9, 0.8, 0.5, ALL);
        assert_eq!(heights.files, Some(3));
        assert_eq!(heights.requests, Some(3));
        assert_eq!(heights.workflows, Some(3));
        assert_eq!(heights.total(), 9);
    }

    #[test]
    fn even_fallback_deals_rows_across_all_three_panes() {
        // 11 - 6 = 5 content rows cannot hold 2 + 4: 2 / 2 / 1, not 2 / 1 / 2
        let heights = split_sidebar(&config(), 11, 0.5, 0.5, ALL);
        assert_eq!(heights.files, Some(4));
        assert_eq!(heights.requests, Some(4));
        assert_eq!(heights.workflows, Some(3));
        assert_eq!(heights.total(), 11);

        // the ratios are ignored while the fallback applies
        let skewed = split_sidebar(&config(), 11, 0.8, 0.2, ALL);
        assert_eq!(skewed.files, heights.files);
        assert_eq!(skewed.requests, heights.requests);
        assert_eq!(skewed.workflows, heights.workflows);
    }

    #[test]
    fn even_thirds_spreads_remainder() {
        assert_eq!(even_thirds(0), (0, 0, 0));
        assert_eq!(even_thirds(1), (1, 0, 0));
        assert_eq!(even_thirds(5), (2, 2, 1));
        assert_eq!(even_thirds(9), (3, 3, 3));
    }

    #[test]
    fn requests_and_workflows_use_workflow_split() {
        let panes = SidebarPanes {
            files: false,
            requests: true,
            workflows: true,
        };
        let heights = split_sidebar(&config(), 24, 0.2, 0.75, panes);
        // 20 content rows, 15 / 5
        assert_eq!(heights.files, None);
        assert_eq!(heights.requests, Some(17));
        assert_eq!(heights.workflows, Some(7));
        assert_eq!(heights.sidebar_split, 0.2);
        assert_eq!(heights.workflow_split, 0.75);
    }

    #[test]
    fn files_and_workflows_use_sidebar_split() {
        let panes = SidebarPanes {
            files: true,
            requests: false,
            workflows: true,
        };
        let heights = split_sidebar(&config(), 24, 0.25, 0.8, panes);
        assert_eq!(heights.files, Some(7));
        assert_eq!(heights.workflows, Some(17));
        assert_eq!(heights.total(), 24);
    }

    #[test]
    fn single_pane_takes_everything() {
        let panes = SidebarPanes {
            files: false,
            requests: true,
            workflows: false,
        };
        let heights = split_sidebar(&config(), 30, 0.8, 0.8, panes);
        assert_eq!(heights.requests, Some(30));
        assert_eq!(heights.total(), 30);
    }

    #[test]
    fn no_panes() {
        let heights = split_sidebar(&config(), 30, 0.5, 0.5, SidebarPanes::default());
        assert_eq!(heights.total(), 0);
        assert!(SidebarPanes::default().is_empty());
    }

    #[test]
    fn tiny_height_keeps_borders() {
        let heights = split_sidebar(&config(), 3, 0.5, 0.5, ALL);
        assert_eq!(heights.files, Some(2));
        assert_eq!(heights.requests, Some(2));
        assert_eq!(heights.workflows, Some(2));
    }
}
