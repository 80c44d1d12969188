mod keys;
mod tui;

pub(crate) use tui::as_tui;


#[cfg(test)]
#[path = "run/tui_tests.rs"]
mod tui_tests;
