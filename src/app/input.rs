use crate::app::action::Action;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

const MOUSE_SCROLL_LINES: i64 = 3;

/// Translates a terminal event into an action. `timestamp` is the monotonic
/// time of the event in milliseconds.
pub fn map_event_to_action(event: Event, timestamp: u64) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            match key.code {
                KeyCode::Char(_)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Action::KeyPress(key, timestamp))
                }
                _ => Some(Action::Key(key)),
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollBy(MOUSE_SCROLL_LINES)),
            MouseEventKind::ScrollUp => Some(Action::ScrollBy(-MOUSE_SCROLL_LINES)),
            _ => None,
        },
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_printable_keys_carry_timestamp() {
        let event = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(event), 1234),
            Some(Action::KeyPress(event, 1234))
        );
        // Shifted characters are still printable.
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            map_event_to_action(Event::Key(event), 5),
            Some(Action::KeyPress(event, 5))
        );
    }

    #[test]
    fn test_modified_and_special_keys() {
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL), 0),
            Some(Action::Quit)
        );
        let event = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::ALT);
        assert_eq!(
            map_event_to_action(Event::Key(event), 0),
            Some(Action::Key(event))
        );
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(event), 0),
            Some(Action::Key(event))
        );
    }

    #[test]
    fn test_release_is_dropped() {
        let mut event = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(event), 0), None);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::empty(),
            })
        };
        assert_eq!(
            map_event_to_action(wheel(MouseEventKind::ScrollDown), 0),
            Some(Action::ScrollBy(3))
        );
        assert_eq!(
            map_event_to_action(wheel(MouseEventKind::ScrollUp), 0),
            Some(Action::ScrollBy(-3))
        );
        assert_eq!(map_event_to_action(wheel(MouseEventKind::Moved), 0), None);
    }
}
