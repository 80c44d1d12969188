use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::SessionEvent;

/// Decode a terminal event. Anything without a meaning for the input field maps to `None`.
pub(crate) fn to_session_event(event: Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => from_key(key),
        Event::Paste(text) => Some(SessionEvent::Paste(text)),
        _ => None,
    }
}

fn from_key(key: KeyEvent) -> Option<SessionEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Esc => SessionEvent::Cancel,
        KeyCode::Char('c') if ctrl => SessionEvent::Cancel,
        KeyCode::Enter => SessionEvent::Submit,
        KeyCode::Char('a') if ctrl => SessionEvent::Home,
        KeyCode::Char('e') if ctrl => SessionEvent::End,
        KeyCode::Char('u') if ctrl => SessionEvent::ClearToStart,
        KeyCode::Char('k') if ctrl => SessionEvent::ClearToEnd,
        KeyCode::Char('h') if ctrl => SessionEvent::Backspace,
        KeyCode::Char('d') if ctrl => SessionEvent::Delete,
        KeyCode::Char('b') if ctrl => SessionEvent::Left,
        KeyCode::Char('f') if ctrl => SessionEvent::Right,
        KeyCode::Char('w') if ctrl => SessionEvent::DeleteWordBackward,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => SessionEvent::Insert(c),
        KeyCode::Backspace => SessionEvent::Backspace,
        KeyCode::Delete => SessionEvent::Delete,
        KeyCode::Left => SessionEvent::Left,
        KeyCode::Right => SessionEvent::Right,
        KeyCode::Home => SessionEvent::Home,
        KeyCode::End => SessionEvent::End,
        _ => return None,
    };
    Some(event)
}
