//! Mapping from terminal events to loop control signals.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Request the frame loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Stop,
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a terminal event to a control signal.
///
/// Only key presses count; releases, repeats, mouse and resize events are ignored.
pub fn control_for_event(event: &Event) -> Option<ControlSignal> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(ControlSignal::Stop)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_only_presses_stop() {
        let press = Event::Key(KeyEvent::from(KeyCode::Char('q')));
        assert_eq!(control_for_event(&press), Some(ControlSignal::Stop));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(control_for_event(&release), None);
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert_eq!(control_for_event(&Event::Resize(80, 24)), None);
        assert_eq!(control_for_event(&Event::FocusLost), None);
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(control_for_event(&click), None);
    }
}
