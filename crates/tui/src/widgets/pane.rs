//! Bordered pane widgets.
//!
//! Each pane owns its last known size. [`Panes::apply_layout`] pushes a
//! fresh set of engine boxes into every pane before a frame is drawn; a
//! pane without a box stays hidden.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use volley_layout::{Emphasis, LayoutBoxes, LayoutState};
use volley_protocol::{RegionBox, RegionId, Workspace};

use crate::layout::RegionRects;

/// The regions drawn as panes.
pub const PANE_REGIONS: [RegionId; 6] = [
    RegionId::Files,
    RegionId::Requests,
    RegionId::Workflows,
    RegionId::Editor,
    RegionId::Response,
    RegionId::ResponseSecondary,
];

/// A pane and the size the engine last gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneWidget {
    region: RegionId,
    size: Option<RegionBox>,
    emphasis: Emphasis,
}

impl PaneWidget {
    /// Creates a hidden pane for `region`.
    #[must_use]
    pub const fn new(region: RegionId) -> Self {
        Self {
            region,
            size: None,
            emphasis: Emphasis::Inactive,
        }
    }

    /// The region this pane shows.
    #[must_use]
    pub const fn region(&self) -> RegionId {
        self.region
    }

    /// The size from the last layout, if the pane is shown.
    #[must_use]
    pub const fn size(&self) -> Option<RegionBox> {
        self.size
    }

    /// Returns `true` if the pane has a box.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.size.is_some()
    }

    /// Whether the pane is drawn as focused.
    #[must_use]
    pub const fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Replaces the size and emphasis.
    pub fn resize(&mut self, size: Option<RegionBox>, emphasis: Emphasis) {
        self.size = size;
        self.emphasis = emphasis;
    }

    /// Draws the pane into `area`. Hidden panes draw nothing.
    pub fn render(&self, area: Rect, workspace: &Workspace, buf: &mut Buffer) {
        let Some(size) = self.size else {
            return;
        };

        let (border, title) = match self.emphasis {
            Emphasis::Active => (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Emphasis::Inactive => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            ),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(Span::styled(format!(" {} ", self.region.title()), title)))
            .title(
                Line::from(Span::styled(
                    format!(" {size} "),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );

        Paragraph::new(content(self.region, workspace))
            .block(block)
            .render(area, buf);
    }
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}

fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" | "PATCH" => Color::Blue,
        "DELETE" => Color::Red,
        _ => Color::Magenta,
    }
}

fn listed<'a>(entries: impl IntoIterator<Item = Line<'a>>) -> Vec<Line<'a>> {
    let lines: Vec<Line<'a>> = entries.into_iter().collect();
    if lines.is_empty() {
        vec![hint("(empty)")]
    } else {
        lines
    }
}

fn content(region: RegionId, workspace: &Workspace) -> Vec<Line<'_>> {
    match region {
        RegionId::Files => listed(workspace.files.iter().map(|f| Line::from(f.as_str()))),
        RegionId::Requests => listed(workspace.requests.iter().map(|r| {
            Line::from(vec![
                Span::styled(
                    format!("{:<7}", r.method),
                    Style::default().fg(method_color(&r.method)),
                ),
                Span::raw(r.name.as_str()),
            ])
        })),
        RegionId::Workflows => listed(
            workspace
                .workflows
                .iter()
                .map(|w| Line::from(format!("▸ {w}"))),
        ),
        RegionId::Editor => match workspace.requests.first() {
            Some(request) => vec![
                Line::from(vec![
                    Span::styled(
                        request.method.as_str(),
                        Style::default()
                            .fg(method_color(&request.method))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(request.url.as_str()),
                ]),
                Line::from(""),
                hint("(read only)"),
            ],
            None => vec![hint("No request selected")],
        },
        RegionId::Response => vec![hint("No response yet")],
        RegionId::ResponseSecondary => vec![hint("Pin a response to compare")],
        _ => Vec::new(),
    }
}

/// Every pane widget, indexed by region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panes {
    widgets: [PaneWidget; PANE_REGIONS.len()],
}

impl Default for Panes {
    fn default() -> Self {
        Self::new()
    }
}

impl Panes {
    /// Creates the panes, all hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: PANE_REGIONS.map(PaneWidget::new),
        }
    }

    /// Returns the pane for `region`, if it is a pane region.
    #[must_use]
    pub fn get(&self, region: RegionId) -> Option<&PaneWidget> {
        self.widgets.iter().find(|w| w.region == region)
    }

    /// Iterates over the panes that have a box.
    pub fn visible(&self) -> impl Iterator<Item = &PaneWidget> {
        self.widgets.iter().filter(|w| w.is_visible())
    }

    /// Pushes the engine's boxes and the focus emphasis into every pane.
    ///
    /// The secondary response pane is only shown while the compare view is
    /// drawn; otherwise its box just mirrors the primary pane.
    pub fn apply_layout(&mut self, boxes: &LayoutBoxes, state: &LayoutState) {
        for widget in &mut self.widgets {
            let size = match widget.region {
                RegionId::ResponseSecondary if boxes.compare.is_none() => None,
                region => boxes.get(region),
            };
            widget.resize(size, state.emphasis(widget.region));
        }
    }

    /// Draws every visible pane at its placed rectangle.
    pub fn render(&self, rects: &RegionRects, workspace: &Workspace, buf: &mut Buffer) {
        for widget in self.visible() {
            if let Some(area) = rects.get(widget.region) {
                widget.render(area, workspace, buf);
            }
        }
    }
}
