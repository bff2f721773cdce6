//! Screen placement for the TUI.
//!
//! The layout engine only decides sizes. This module owns the chrome bars
//! drawn around the body and turns the engine's [`LayoutBoxes`] into
//! positioned [`Rect`]s: the sidebar column at the left with its panes
//! stacked top to bottom, the main area to its right, the compare panes
//! after their separator, and overlays centered over the body.

use ratatui::layout::Rect;
use volley_layout::LayoutBoxes;
use volley_protocol::{Chrome, Orientation, RegionBox, RegionId};

/// Height of the title header, in rows.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the key hint bar, in rows.
pub const COMMAND_BAR_HEIGHT: u16 = 1;

/// Height of the status bar, in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Terminals shorter than this drop the header to give the body one more
/// row.
pub const MIN_HEIGHT_WITH_HEADER: u16 = 20;

/// Returns the chrome drawn around the body for a terminal of `area`.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use volley_protocol::Chrome;
/// use volley_tui::layout::chrome;
///
/// assert_eq!(chrome(Rect::new(0, 0, 120, 60)), Chrome::new(1, 1, 1));
/// assert_eq!(chrome(Rect::new(0, 0, 120, 15)), Chrome::new(0, 1, 1));
/// ```
#[must_use]
pub fn chrome(area: Rect) -> Chrome {
    let header = if area.height >= MIN_HEIGHT_WITH_HEADER {
        HEADER_HEIGHT
    } else {
        0
    };
    Chrome::new(header, COMMAND_BAR_HEIGHT, STATUS_BAR_HEIGHT)
}

/// The terminal split into chrome bars and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title header, absent when hidden.
    pub header: Option<Rect>,
    /// Rows available to the panes.
    pub body: Rect,
    /// Key hint bar.
    pub command_bar: Rect,
    /// Status bar at the bottom.
    pub status_bar: Rect,
}

/// Splits `area` into header, body, command bar, and status bar.
///
/// The bars keep their rows first; the body gets whatever is left.
#[must_use]
pub fn split_screen(area: Rect, chrome: Chrome) -> ScreenAreas {
    let status_height = chrome.status_bar.min(area.height);
    let command_height = chrome.command_bar.min(area.height - status_height);
    let header_height = chrome
        .header
        .min(area.height - status_height - command_height);
    let body_height = area.height - status_height - command_height - header_height;

    let row = |offset: u16, height: u16| Rect::new(area.x, area.y + offset, area.width, height);

    ScreenAreas {
        header: (header_height > 0).then(|| row(0, header_height)),
        body: row(header_height, body_height),
        command_bar: row(header_height + body_height, command_height),
        status_bar: row(header_height + body_height + command_height, status_height),
    }
}

/// Positioned rectangles for every region that is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionRects {
    rects: [Option<Rect>; RegionId::COUNT],
}

impl RegionRects {
    /// Returns where `region` is drawn, if anywhere.
    #[must_use]
    pub const fn get(&self, region: RegionId) -> Option<Rect> {
        self.rects[region.index()]
    }

    /// Iterates over the drawn regions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, Rect)> + '_ {
        RegionId::ALL
            .into_iter()
            .filter_map(|region| self.get(region).map(|rect| (region, rect)))
    }

    /// Returns the pane under the given cell, if any.
    #[must_use]
    pub fn pane_at(&self, column: u16, row: u16) -> Option<RegionId> {
        self.iter()
            .filter(|(region, _)| region.is_pane())
            .find(|(_, rect)| rect.contains((column, row).into()))
            .map(|(region, _)| region)
    }

    fn place(&mut self, region: RegionId, rect: Rect, clip: Rect) {
        let visible = rect.intersection(clip);
        self.rects[region.index()] = (!visible.is_empty()).then_some(visible);
    }
}

fn at(x: u16, y: u16, size: RegionBox) -> Rect {
    Rect::new(x, y, size.width, size.height)
}

/// Positions the engine's boxes inside `body`.
///
/// Boxes larger than the body (the engine never shrinks the body below its
/// minimum height) are clipped to it. Regions whose clipped rectangle is
/// empty are left out.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use volley_config::LayoutConfig;
/// use volley_layout::LayoutEngine;
/// use volley_protocol::{Chrome, RegionId, TerminalFrame};
/// use volley_tui::layout::place_regions;
///
/// let mut engine = LayoutEngine::new(LayoutConfig::default());
/// engine.set_chrome(Chrome::new(1, 1, 1));
/// let boxes = *engine.resize(TerminalFrame::new(120, 60)).unwrap();
///
/// let rects = place_regions(&boxes, engine.state().main_orientation(), Rect::new(0, 1, 120, 57));
/// assert_eq!(rects.get(RegionId::Files), Some(Rect::new(0, 1, 24, 29)));
/// assert_eq!(rects.get(RegionId::Response), Some(Rect::new(73, 1, 47, 57)));
/// ```
#[must_use]
pub fn place_regions(
    boxes: &LayoutBoxes,
    main_orientation: Orientation,
    body: Rect,
) -> RegionRects {
    let mut rects = RegionRects::default();

    let mut y = body.y;
    for region in [RegionId::Files, RegionId::Requests, RegionId::Workflows] {
        if let Some(size) = boxes.get(region) {
            rects.place(region, at(body.x, y, size), body);
            y = y.saturating_add(size.height);
        }
    }

    let main_x = body.x.saturating_add(boxes.sidebar_width);
    let main_right = main_x.saturating_add(boxes.main_width);
    let editor = boxes.get(RegionId::Editor);
    if let Some(size) = editor {
        rects.place(RegionId::Editor, at(main_x, body.y, size), body);
    }

    if let Some(area) = boxes.response_area {
        let origin = match (editor, main_orientation) {
            (Some(_), Orientation::SideBySide) => (main_right.saturating_sub(area.width), body.y),
            (Some(editor), Orientation::Stacked) => (main_x, body.y.saturating_add(editor.height)),
            (None, _) => (main_x, body.y),
        };
        place_response(&mut rects, boxes, at(origin.0, origin.1, area), body);
    }

    for overlay in [
        RegionId::History,
        RegionId::EnvironmentPicker,
        RegionId::ThemePicker,
    ] {
        if let Some(size) = boxes.get(overlay) {
            let x = body.x + body.width.saturating_sub(size.width) / 2;
            let y = body.y + body.height.saturating_sub(size.height) / 2;
            rects.place(overlay, at(x, y, size), body);
        }
    }

    rects
}

fn place_response(rects: &mut RegionRects, boxes: &LayoutBoxes, area: Rect, clip: Rect) {
    let (Some(primary), Some(secondary)) = (
        boxes.get(RegionId::Response),
        boxes.get(RegionId::ResponseSecondary),
    ) else {
        return;
    };

    rects.place(RegionId::Response, at(area.x, area.y, primary), clip);
    match boxes.compare {
        Some(Orientation::SideBySide) => {
            let x = area.right().saturating_sub(secondary.width);
            rects.place(RegionId::ResponseSecondary, at(x, area.y, secondary), clip);
        }
        Some(Orientation::Stacked) => {
            let y = area.bottom().saturating_sub(secondary.height);
            rects.place(RegionId::ResponseSecondary, at(area.x, y, secondary), clip);
        }
        None => {}
    }
}
