//! Editor/response division of the main area.

use tracing::trace;
use volley_config::LayoutConfig;
use volley_protocol::{Orientation, RegionBox};

use crate::geometry::{Degrade, settle_ratio, split_span};

/// The part of the body right of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainArea {
    /// Columns right of the sidebar.
    pub width: u16,
    /// Body rows.
    pub height: u16,
    /// Whether the editor is visible.
    pub editor: bool,
    /// Whether the response viewer is visible.
    pub response: bool,
}

/// Editor and response boxes plus the settled editor ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainSplit {
    /// Editor box, if visible.
    pub editor: Option<RegionBox>,
    /// Response box, if visible.
    pub response: Option<RegionBox>,
    /// Editor share, settled against the realized split.
    pub editor_split: f64,
}

/// Divides the main area between the editor and the response viewer.
///
/// Side by side, one gap column separates the panes and their widths honor
/// the width minimums, degrading proportionally when both cannot fit.
/// Stacked, the panes divide their content rows (border rows excluded) by
/// the same ratio, halving when the height minimums cannot fit. A lone
/// visible pane takes the whole area and leaves the ratio alone.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::main_split::{split_main, MainArea};
/// use volley_protocol::{Orientation, RegionBox};
///
/// let area = MainArea { width: 96, height: 57, editor: true, response: true };
/// let split = split_main(&LayoutConfig::default(), area, 0.5, Orientation::SideBySide);
/// assert_eq!(split.editor, Some(RegionBox::new(48, 57)));
/// assert_eq!(split.response, Some(RegionBox::new(47, 57)));
///
/// let split = split_main(&LayoutConfig::default(), area, 0.5, Orientation::Stacked);
/// assert_eq!(split.editor, Some(RegionBox::new(96, 29)));
/// assert_eq!(split.response, Some(RegionBox::new(96, 28)));
/// ```
#[must_use]
pub fn split_main(
    config: &LayoutConfig,
    area: MainArea,
    editor_split: f64,
    orientation: Orientation,
) -> MainSplit {
    let whole = RegionBox::new(area.width, area.height);
    let mut out = MainSplit {
        editor: None,
        response: None,
        editor_split,
    };

    match (area.editor, area.response) {
        (true, true) => {}
        (true, false) => {
            out.editor = Some(whole);
            return out;
        }
        (false, true) => {
            out.response = Some(whole);
            return out;
        }
        (false, false) => return out,
    }

    match orientation {
        Orientation::SideBySide => {
            let avail = area.width.saturating_sub(config.main_gap);
            let (editor, response) = split_span(
                avail,
                editor_split,
                config.min_editor_width,
                config.min_response_width,
                Degrade::Proportional,
            );
            out.editor = Some(RegionBox::new(editor, area.height));
            out.response = Some(RegionBox::new(response, area.height));
            out.editor_split = settle_ratio(editor_split, &config.editor_split, avail, editor);
            trace!(avail, editor, response, "main split side by side");
        }
        Orientation::Stacked => {
            let border = config.pane_border;
            let avail = area.height.saturating_sub(border.saturating_mul(2));
            let (editor, response) = split_span(
                avail,
                editor_split,
                config.min_editor_height,
                config.min_response_height,
                Degrade::Even,
            );
            out.editor = Some(RegionBox::new(area.width, editor.saturating_add(border)));
            out.response = Some(RegionBox::new(area.width, response.saturating_add(border)));
            out.editor_split = settle_ratio(editor_split, &config.editor_split, avail, editor);
            trace!(avail, editor, response, "main split stacked");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> MainArea {
        MainArea {
            width,
            height,
            editor: true,
            response: true,
        }
    }

    #[test]
    fn side_by_side_widths_sum_with_gap() {
        let config = LayoutConfig::default();
        let split = split_main(&config, area(96, 57), 0.5, Orientation::SideBySide);
        let editor = split.editor.unwrap();
        let response = split.response.unwrap();
        assert_eq!(editor.width + response.width + config.main_gap, 96);
        assert_eq!(editor.height, 57);
        assert_eq!(split.editor_split, 0.5);
    }

    #[test]
    fn side_by_side_clamps_to_minimum_and_settles() {
        let split = split_main(&LayoutConfig::default(), area(49, 20), 0.8, Orientation::SideBySide);
        assert_eq!(split.editor, Some(RegionBox::new(24, 20)));
        assert_eq!(split.response, Some(RegionBox::new(24, 20)));
        assert_eq!(split.editor_split, 0.5);
    }

    #[test]
    fn side_by_side_degrades_proportionally() {
        let split = split_main(&LayoutConfig::default(), area(21, 10), 0.5, Orientation::SideBySide);
        assert_eq!(split.editor, Some(RegionBox::new(10, 10)));
        assert_eq!(split.response, Some(RegionBox::new(10, 10)));
    }

    #[test]
    fn stacked_heights_sum_to_body() {
        let split = split_main(&LayoutConfig::default(), area(80, 31), 0.7, Orientation::Stacked);
        let editor = split.editor.unwrap();
        let response = split.response.unwrap();
        assert_eq!(editor.height + response.height, 31);
        assert_eq!(editor.width, 80);
        // 27 content rows, 0.7 -> 19
        assert_eq!(editor.height, 21);
        assert_eq!(split.editor_split, 0.7);
    }

    #[test]
    fn stacked_degrades_evenly() {
        let split = split_main(&LayoutConfig::default(), area(80, 8), 0.8, Orientation::Stacked);
        // 4 content rows cannot hold 3 + 3
        assert_eq!(split.editor, Some(RegionBox::new(80, 4)));
        assert_eq!(split.response, Some(RegionBox::new(80, 4)));
    }

    #[test]
    fn lone_pane_takes_area() {
        let mut only_response = area(70, 30);
        only_response.editor = false;
        let split = split_main(&LayoutConfig::default(), only_response, 0.3, Orientation::SideBySide);
        assert_eq!(split.editor, None);
        assert_eq!(split.response, Some(RegionBox::new(70, 30)));
        assert_eq!(split.editor_split, 0.3);
    }

    #[test]
    fn nothing_visible() {
        let mut none = area(70, 30);
        none.editor = false;
        none.response = false;
        let split = split_main(&LayoutConfig::default(), none, 0.5, Orientation::Stacked);
        assert_eq!(split.editor, None);
        assert_eq!(split.response, None);
    }

    #[test]
    fn zero_width_still_yields_boxes() {
        let split = split_main(&LayoutConfig::default(), area(0, 0), 0.5, Orientation::SideBySide);
        assert_eq!(split.editor, Some(RegionBox::new(1, 1)));
        assert_eq!(split.response, Some(RegionBox::new(1, 1)));
    }
}
