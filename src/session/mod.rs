use crate::allocate::allocate;
use crate::input::{InputError, TextInput, INCOME_CHAR_LIMIT};
use crate::models::{Allocation, Category};

pub(crate) const INPUT_PLACEHOLDER: &str = "Euro amount";

/// Input events, already decoded from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionEvent {
    Insert(char),
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    DeleteWordBackward,
    ClearToStart,
    ClearToEnd,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionState {
    AwaitingInput(TextInput),
    InputRejected(InputError),
    ResultReady(Vec<Allocation>),
}

impl SessionState {
    pub(crate) fn is_terminal(&self) -> bool {
        !matches!(self, Self::AwaitingInput(_))
    }
}

/// One run of the calculator: a single income in, a single table (or error) out.
pub(crate) struct Session {
    categories: Vec<Category>,
    state: SessionState,
    cancelled: bool,
}

impl Session {
    pub(crate) fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            state: SessionState::AwaitingInput(
                TextInput::new(INCOME_CHAR_LIMIT).placeholder(INPUT_PLACEHOLDER),
            ),
            cancelled: false,
        }
    }

    pub(crate) fn state(&self) -> &SessionState {
        &self.state
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn is_running(&self) -> bool {
        !self.cancelled && !self.state.is_terminal()
    }

    pub(crate) fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Apply one event. Events arriving after the session has ended are dropped.
    pub(crate) fn handle(&mut self, event: SessionEvent) {
        if !self.is_running() {
            return;
        }
        let SessionState::AwaitingInput(input) = &mut self.state else {
            return;
        };

        match event {
            SessionEvent::Insert(c) => input.insert(c),
            SessionEvent::Paste(text) => input.insert_str(&text),
            SessionEvent::Backspace => input.backspace(),
            SessionEvent::Delete => input.delete(),
            SessionEvent::Left => input.move_left(),
            SessionEvent::Right => input.move_right(),
            SessionEvent::Home => input.move_start(),
            SessionEvent::End => input.move_end(),
            SessionEvent::ClearToStart => input.delete_to_start(),
            SessionEvent::ClearToEnd => input.delete_to_end(),
            SessionEvent::DeleteWordBackward => input.delete_word_backward(),
            SessionEvent::Cancel => self.cancelled = true,
            SessionEvent::Submit => {
                self.state = match input.submit() {
                    Ok(income) => SessionState::ResultReady(allocate(income, &self.categories)),
                    Err(e) => SessionState::InputRejected(e),
                };
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Category::defaults())
    }
}
