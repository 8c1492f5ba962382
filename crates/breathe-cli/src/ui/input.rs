//! Non-blocking keyboard polling.

use std::time::Duration;

use breathe_core::{InputSource, Signal};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keystroke source for the session loop. Polling never blocks -- the
/// engine owns the frame cadence.
pub struct Keys;

impl InputSource for Keys {
    fn poll(&mut self) -> Option<Signal> {
        // At most one event per poll; the engine polls every tick anyway.
        if !event::poll(Duration::ZERO).unwrap_or(false) {
            return None;
        }
        match event::read() {
            Ok(Event::Key(key)) => translate(key),
            _ => None,
        }
    }
}

fn translate(key: KeyEvent) -> Option<Signal> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Signal::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Signal::Quit),
        KeyCode::Char(' ') => Some(Signal::PauseToggle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_translate() {
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(Signal::Quit));
        assert_eq!(translate(press(KeyCode::Esc)), Some(Signal::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Signal::Quit)
        );
    }

    #[test]
    fn space_toggles_pause() {
        assert_eq!(
            translate(press(KeyCode::Char(' '))),
            Some(Signal::PauseToggle)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(translate(press(KeyCode::Char('c'))), None);
        assert_eq!(translate(press(KeyCode::Enter)), None);
        assert_eq!(translate(press(KeyCode::Char('Q'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(translate(key), None);
    }
}
