//! Picker overlays: request history, environments, and themes.
//!
//! The engine sizes the overlay box; this module only fills it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};
use volley_protocol::RegionId;

/// Draws the `region` overlay listing `entries` with row `selected`
/// highlighted.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use volley_protocol::RegionId;
/// use volley_tui::widgets::render_overlay;
///
/// let entries = vec!["local".to_string(), "staging".to_string()];
/// let area = Rect::new(0, 0, 30, 8);
/// let mut buf = Buffer::empty(area);
/// render_overlay(RegionId::EnvironmentPicker, &entries, 1, area, &mut buf);
/// ```
pub fn render_overlay(
    region: RegionId,
    entries: &[String],
    selected: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    Clear.render(area, buf);

    let accent = Style::default().fg(Color::LightYellow);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(accent)
        .title(Span::styled(
            format!(" {} ", region.title()),
            accent.add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                " ↑↓ move · Enter/Esc close ",
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );

    if entries.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Line::from(Span::styled(
            "  nothing here yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(inner, buf);
        return;
    }

    let items: Vec<ListItem<'_>> = entries
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(selected.min(entries.len() - 1)));
    StatefulWidget::render(list, area, buf, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, row_text};
    use volley_protocol::dummy::dummy_workspace;

    #[test]
    fn overlay_lists_entries_with_title() {
        let ws = dummy_workspace();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_overlay(RegionId::History, &ws.history, 0, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(row_text(&buf, 0).contains("History"));
        assert!(content.contains("› 200 GET list users"));
        assert!(content.contains("201 POST login"));
    }

    #[test]
    fn selection_moves_highlight() {
        let ws = dummy_workspace();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        render_overlay(RegionId::ThemePicker, &ws.themes, 2, area, &mut buf);

        assert!(row_text(&buf, 3).contains("› solarized"));
        assert_eq!(buf[(3, 3)].bg, Color::LightYellow);
    }

    #[test]
    fn selection_past_end_is_clamped() {
        let ws = dummy_workspace();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        render_overlay(RegionId::EnvironmentPicker, &ws.environments, 99, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("› production"));
    }

    #[test]
    fn empty_overlay_shows_placeholder() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        render_overlay(RegionId::History, &[], 0, area, &mut buf);
        assert!(buffer_to_string(&buf).contains("nothing here yet"));
    }

    #[test]
    fn overlay_clears_what_is_underneath() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 2, "XXXXXXXXXXXXXXXXXXXX", Style::default());
        render_overlay(RegionId::ThemePicker, &[], 0, area, &mut buf);
        assert!(!buffer_to_string(&buf).contains('X'));
    }
}
