//! Status and command bars at the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use volley_layout::LayoutState;
use volley_protocol::SplitTarget;

use crate::state::Notice;

/// Builds the status line text: focus, every ratio, and both orientations.
#[must_use]
pub fn status_text(state: &LayoutState) -> String {
    let ratios: Vec<String> = SplitTarget::ALL
        .into_iter()
        .map(|target| format!("{} {:.2}", target.label(), state.ratio(target)))
        .collect();
    let compare = if state.compare_enabled() {
        state.response_orientation().label()
    } else {
        "off"
    };
    format!(
        " {} │ {} │ main {} │ compare {}",
        state.focus().title(),
        ratios.join(" · "),
        state.main_orientation().label(),
        compare,
    )
}

/// Renders the status bar. A pending notice is shown at the right edge.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use volley_config::LayoutConfig;
/// use volley_layout::LayoutState;
/// use volley_tui::widgets::render_status_bar;
///
/// let state = LayoutState::new(&LayoutConfig::default());
/// let area = Rect::new(0, 0, 120, 1);
/// let mut buf = Buffer::empty(area);
/// render_status_bar(&state, None, area, &mut buf);
/// ```
pub fn render_status_bar(state: &LayoutState, notice: Option<Notice>, area: Rect, buf: &mut Buffer) {
    let base = Style::default().bg(Color::DarkGray).fg(Color::White);
    buf.set_style(area, base);

    Line::from(Span::styled(status_text(state), base)).render(area, buf);

    if let Some(notice) = notice {
        Line::from(Span::styled(
            format!(" ⚠ {} ", notice.text()),
            base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .right_aligned()
        .render(area, buf);
    }
}

/// Renders the key hints shown above the status bar.
pub fn render_command_bar(area: Rect, buf: &mut Buffer) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);
    let hints = [
        ("Tab", "focus"),
        ("[ ]", "editor"),
        ("^←→", "sidebar"),
        ("o", "flip"),
        ("c", "compare"),
        ("1-5", "collapse"),
        ("h/e/t", "pickers"),
        ("?", "help"),
        ("^C", "quit"),
    ];

    let spans: Vec<Span<'static>> = hints
        .into_iter()
        .flat_map(|(k, label)| {
            [
                Span::styled(format!(" {k} "), key),
                Span::styled(format!("{label} "), text),
            ]
        })
        .collect();
    Line::from(spans).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row_text;
    use volley_config::LayoutConfig;
    use volley_protocol::{RegionId, SplitTarget};

    #[test]
    fn status_text_lists_defaults() {
        let state = LayoutState::new(&LayoutConfig::default());
        assert_eq!(
            status_text(&state),
            " Editor │ sidebar 0.20 · files 0.50 · requests 0.50 · editor 0.50 · compare 0.50 │ main side-by-side │ compare off"
        );
    }

    #[test]
    fn status_text_shows_compare_orientation() {
        let state = LayoutState::new(&LayoutConfig::default()).with_compare_enabled(true);
        assert!(status_text(&state).ends_with("compare side-by-side"));
    }

    #[test]
    fn notice_is_right_aligned() {
        let state = LayoutState::new(&LayoutConfig::default());
        let area = Rect::new(0, 0, 160, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            &state,
            Some(Notice::BoundReached(SplitTarget::SidebarWidth)),
            area,
            &mut buf,
        );

        let row = row_text(&buf, 0);
        assert!(row.trim_end().ends_with("⚠ sidebar split at its limit"));
        assert!(row.starts_with(" Editor"));
    }

    #[test]
    fn notice_names_refused_collapse() {
        let state = LayoutState::new(&LayoutConfig::default());
        let area = Rect::new(0, 0, 200, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(
            &state,
            Some(Notice::CollapseRefused(RegionId::Response)),
            area,
            &mut buf,
        );
        assert!(row_text(&buf, 0).contains("cannot collapse Response"));
    }

    #[test]
    fn command_bar_shows_hints() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        render_command_bar(area, &mut buf);
        let row = row_text(&buf, 0);
        assert!(row.contains("Tab focus"));
        assert!(row.contains("? help"));
    }
}
