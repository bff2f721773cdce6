//! Help overlay widget.
//!
//! Lists every key binding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 46;

/// Key bindings, grouped by section.
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Focus",
        &[
            ("Tab", "Next pane"),
            ("Shift+Tab", "Previous pane"),
            ("1..5", "Collapse/restore a pane"),
        ],
    ),
    (
        "Layout",
        &[
            ("Ctrl+← →", "Sidebar width"),
            ("Ctrl+↑ ↓", "Files / requests split"),
            ("Alt+↑ ↓", "Requests / workflows split"),
            ("[ ]", "Editor / response split"),
            ("{ }", "Compare split"),
            ("o", "Flip editor orientation"),
            ("O", "Flip compare orientation"),
            ("c", "Toggle compare view"),
            ("w", "Toggle workflow list"),
        ],
    ),
    (
        "Pickers",
        &[
            ("h", "History"),
            ("e", "Environments"),
            ("t", "Themes"),
            ("Esc", "Close overlay"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use volley_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let accent = Style::default().fg(Color::LightYellow);
    let help_block = Block::bordered()
        .title(Span::styled(" Help ", accent.add_modifier(Modifier::BOLD)))
        .border_type(BorderType::Rounded)
        .border_style(accent);

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a rectangle of at most `width` x `height` centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + (area.width - popup_width) / 2;
    let y = area.y + (area.height - popup_height) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
