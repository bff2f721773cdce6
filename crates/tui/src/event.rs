//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use volley_protocol::{FocusDirection, Message, OrientationTarget, RegionId, SplitTarget};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Panes toggled by the digit keys `1` to `5`.
const COLLAPSE_KEYS: [RegionId; 5] = [
    RegionId::Files,
    RegionId::Requests,
    RegionId::Workflows,
    RegionId::Editor,
    RegionId::Response,
];

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Mouse clicks are not messages on their own; they need the placed
/// regions to resolve and are handled by the app directly.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Returns the clicked cell of a left-button press.
#[must_use]
pub fn click_position(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some((mouse.column, mouse.row))
        }
        _ => None,
    }
}

fn adjust(target: SplitTarget, grow: bool) -> Option<Message> {
    Some(Message::AdjustSplit { target, grow })
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close overlay or help |
/// | `Tab` / `Shift+Tab` | Next / previous pane |
/// | `Ctrl+←` / `Ctrl+→` | Narrow / widen sidebar |
/// | `Ctrl+↑` / `Ctrl+↓` | Shrink / grow file browser |
/// | `Alt+↑` / `Alt+↓` | Shrink / grow request list |
/// | `[` / `]` | Shrink / grow editor |
/// | `{` / `}` | Shrink / grow primary response |
/// | `o` / `O` | Flip editor / compare orientation |
/// | `c` | Toggle compare view |
/// | `1`..`5` | Collapse files, requests, workflows, editor, response |
/// | `w` | Toggle workflow list |
/// | `h` / `e` / `t` | History / environments / themes |
/// | `↑` / `↓` | Move the overlay cursor |
/// | `Enter` | Close overlay |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Left => adjust(SplitTarget::SidebarWidth, false),
            KeyCode::Right => adjust(SplitTarget::SidebarWidth, true),
            KeyCode::Up => adjust(SplitTarget::SidebarSplit, false),
            KeyCode::Down => adjust(SplitTarget::SidebarSplit, true),
            _ => None,
        };
    }

    if alt {
        return match key.code {
            KeyCode::Up => adjust(SplitTarget::WorkflowSplit, false),
            KeyCode::Down => adjust(SplitTarget::WorkflowSplit, true),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::CycleFocus {
            direction: FocusDirection::Forward,
        }),
        KeyCode::BackTab => Some(Message::CycleFocus {
            direction: FocusDirection::Backward,
        }),
        KeyCode::Up => Some(Message::OverlayNavigate { delta: -1 }),
        KeyCode::Down => Some(Message::OverlayNavigate { delta: 1 }),
        KeyCode::Enter => Some(Message::CloseOverlay),

        KeyCode::Char('[') => adjust(SplitTarget::EditorSplit, false),
        KeyCode::Char(']') => adjust(SplitTarget::EditorSplit, true),
        KeyCode::Char('{') => adjust(SplitTarget::ResponseSplit, false),
        KeyCode::Char('}') => adjust(SplitTarget::ResponseSplit, true),

        KeyCode::Char('o') => Some(Message::ToggleOrientation {
            target: OrientationTarget::Main,
        }),
        KeyCode::Char('O') => Some(Message::ToggleOrientation {
            target: OrientationTarget::Response,
        }),
        KeyCode::Char('c') => Some(Message::ToggleCompare),
        KeyCode::Char('w') => Some(Message::ToggleWorkflows),

        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            Some(Message::ToggleCollapse {
                region: COLLAPSE_KEYS[index],
            })
        }

        KeyCode::Char('h') => Some(Message::OpenOverlay {
            region: RegionId::History,
        }),
        KeyCode::Char('e') => Some(Message::OpenOverlay {
            region: RegionId::EnvironmentPicker,
        }),
        KeyCode::Char('t') => Some(Message::OpenOverlay {
            region: RegionId::ThemePicker,
        }),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn plain_c_toggles_compare() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('c'))),
            Some(Message::ToggleCompare)
        );
    }

    #[test]
    fn focus_cycle_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::CycleFocus {
                direction: FocusDirection::Forward
            })
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Message::CycleFocus {
                direction: FocusDirection::Backward
            })
        );
    }

    #[test]
    fn sidebar_adjust_keys() {
        let ctrl = |code| key_to_message(make_key_with_modifiers(code, KeyModifiers::CONTROL));
        assert_eq!(ctrl(KeyCode::Left), adjust(SplitTarget::SidebarWidth, false));
        assert_eq!(ctrl(KeyCode::Right), adjust(SplitTarget::SidebarWidth, true));
        assert_eq!(ctrl(KeyCode::Up), adjust(SplitTarget::SidebarSplit, false));
        assert_eq!(ctrl(KeyCode::Down), adjust(SplitTarget::SidebarSplit, true));

        let alt = |code| key_to_message(make_key_with_modifiers(code, KeyModifiers::ALT));
        assert_eq!(alt(KeyCode::Up), adjust(SplitTarget::WorkflowSplit, false));
        assert_eq!(alt(KeyCode::Down), adjust(SplitTarget::WorkflowSplit, true));
        assert_eq!(alt(KeyCode::Left), None);
    }

    #[test]
    fn bracket_keys_adjust_main_and_compare() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('['))),
            adjust(SplitTarget::EditorSplit, false)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(']'))),
            adjust(SplitTarget::EditorSplit, true)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::Char('{'), KeyModifiers::SHIFT)),
            adjust(SplitTarget::ResponseSplit, false)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::Char('}'), KeyModifiers::SHIFT)),
            adjust(SplitTarget::ResponseSplit, true)
        );
    }

    #[test]
    fn orientation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('o'))),
            Some(Message::ToggleOrientation {
                target: OrientationTarget::Main
            })
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::Char('O'), KeyModifiers::SHIFT)),
            Some(Message::ToggleOrientation {
                target: OrientationTarget::Response
            })
        );
    }

    #[test]
    fn digit_keys_collapse_in_focus_order() {
        for (digit, region) in ('1'..='5').zip(COLLAPSE_KEYS) {
            assert_eq!(
                key_to_message(make_key(KeyCode::Char(digit))),
                Some(Message::ToggleCollapse { region })
            );
        }
        assert_eq!(key_to_message(make_key(KeyCode::Char('6'))), None);
    }

    #[test]
    fn overlay_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('h'))),
            Some(Message::OpenOverlay {
                region: RegionId::History
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('e'))),
            Some(Message::OpenOverlay {
                region: RegionId::EnvironmentPicker
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('t'))),
            Some(Message::OpenOverlay {
                region: RegionId::ThemePicker
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::OverlayNavigate { delta: 1 })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::CloseOverlay)
        );
    }

    #[test]
    fn help_and_escape() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn resize_event_becomes_message() {
        assert_eq!(
            event_to_message(&Event::Resize(100, 40)),
            Some(Message::Resize {
                width: 100,
                height: 40
            })
        );
    }

    #[test]
    fn click_position_only_for_left_press() {
        let click = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 12,
                row: 7,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            click_position(&click(MouseEventKind::Down(MouseButton::Left))),
            Some((12, 7))
        );
        assert_eq!(click_position(&click(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(event_to_message(&click(MouseEventKind::Down(MouseButton::Left))), None);
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Left)), None);
    }
}
