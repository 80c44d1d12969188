#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::tui::run_app;
use crate::session::{Session, SessionState};
use crate::ui::render::TuiRenderer;
use crate::ui::theme::Theme;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(s: &str, last: KeyCode) -> VecDeque<Event> {
    s.chars()
        .map(|c| key(KeyCode::Char(c)))
        .chain(std::iter::once(key(last)))
        .collect()
}

/// Run a session against a scripted event queue and return the final screen.
fn run(events: VecDeque<Event>) -> (Session, Vec<String>) {
    let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
    let renderer = TuiRenderer::new(Theme::default());
    let mut session = Session::default();
    let mut events = events;

    run_app(&mut terminal, &renderer, &mut session, || {
        events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
    })
    .unwrap();

    let buffer = terminal.backend().buffer();
    let lines = buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect();
    (session, lines)
}

#[test]
fn test_submitted_session_ends_on_table() {
    let (session, lines) = run(typed("1000", KeyCode::Enter));
    assert!(matches!(session.state(), SessionState::ResultReady(_)));
    assert!(lines[0].starts_with('┌'));
    assert!(lines[1].contains("Name"));
    assert!(lines[3].contains("Fixed costs"));
    assert!(lines[3].contains("500"));
    assert!(lines[6].contains("Guilt-free spending"));
    assert!(lines[6].contains("150"));
    assert!(lines[7].starts_with('└'));
}

#[test]
fn test_rejected_session_ends_on_error() {
    let (session, lines) = run(typed("abc", KeyCode::Enter));
    assert!(matches!(session.state(), SessionState::InputRejected(_)));
    assert!(lines[0].starts_with("There was an error reading your input"));
    assert!(lines[1].starts_with("'abc' is not a whole number"));
}

#[test]
fn test_cancelled_session_clears_screen() {
    let (session, lines) = run(typed("12", KeyCode::Esc));
    assert!(session.was_cancelled());
    assert!(lines.iter().all(|l| l.trim().is_empty()));
}

#[test]
fn test_read_failure_is_reported() {
    let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
    let renderer = TuiRenderer::new(Theme::default());
    let mut session = Session::default();

    let err = run_app(&mut terminal, &renderer, &mut session, || {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "failed to read terminal event");
    assert!(session.is_running());
}
