use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal, TerminalOptions, Viewport,
};
use std::io;

use super::keys::to_session_event;
use crate::session::Session;
use crate::ui::render::TuiRenderer;
use crate::ui::theme::Theme;
use crate::ui::view::build_view_model;

/// Run the session in an inline viewport below the shell prompt. The last
/// frame stays in the scrollback once the program exits.
pub(crate) fn as_tui(session: &mut Session) -> Result<()> {
    let renderer = TuiRenderer::new(Theme::default());
    let height = renderer.viewport_height(session.categories().len());

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enable bracketed paste");
    }

    let options = TerminalOptions {
        viewport: Viewport::Inline(height),
    };
    let result = match Terminal::with_options(CrosstermBackend::new(stdout), options) {
        Ok(mut terminal) => {
            let result = run_app(&mut terminal, &renderer, session, event::read);
            let _ = park_cursor(&mut terminal);
            result
        }
        Err(e) => Err(e).context("failed to initialise terminal"),
    };

    // Both steps run even if one fails; the loop's own error wins.
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let mut stdout = io::stdout();
    let paste = execute!(stdout, DisableBracketedPaste).context("failed to disable bracketed paste");

    result?;
    raw?;
    paste?;
    println!();
    Ok(())
}

/// Draw, read, dispatch until the session ends, then draw its final screen.
pub(crate) fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    renderer: &TuiRenderer,
    session: &mut Session,
    mut read_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    while session.is_running() {
        draw(terminal, renderer, session)?;

        let event = read_event().context("failed to read terminal event")?;
        if let Some(event) = to_session_event(event) {
            session.handle(event);
        }
    }
    draw(terminal, renderer, session)
}

fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    renderer: &TuiRenderer,
    session: &Session,
) -> Result<()> {
    let model = build_view_model(session);
    terminal
        .draw(|f| renderer.draw(f, &model))
        .context("failed to draw frame")?;
    Ok(())
}

/// Leave the cursor on the last line of the viewport so the shell resumes below it.
fn park_cursor<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let area = terminal.get_frame().area();
    terminal.set_cursor_position((area.x, area.bottom().saturating_sub(1)))?;
    terminal.show_cursor()
}
