use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Poll for terminal events with a timeout.
pub fn poll_event(timeout: Duration) -> Option<AppEvent> {
    if event::poll(timeout).ok()? {
        match event::read().ok()? {
            // Windows reports both press and release.
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    } else {
        Some(AppEvent::Tick)
    }
}

/// Check if this is a quit keybinding.
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent { code: KeyCode::Char('d'), modifiers: KeyModifiers::CONTROL, .. }
            | KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. }
            | KeyEvent { code: KeyCode::Char('q'), .. }
            | KeyEvent { code: KeyCode::Esc, .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)));
    }
}
