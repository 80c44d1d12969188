use crate::session::{Session, SessionState};

pub(crate) const PROMPT: &str = "Input income?";
pub(crate) const HINT: &str = "Press 'esc' to quit";
pub(crate) const INPUT_ERROR: &str = "There was an error reading your input";
pub(crate) const COLUMNS: [&str; 3] = ["Name", "Percentage", "Amount"];

/// Renderer-agnostic description of one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenderModel {
    Prompt {
        prompt: String,
        buffer: String,
        placeholder: String,
        cursor: usize,
        hint: String,
    },
    Error {
        message: String,
        detail: String,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<[String; 3]>,
    },
    /// Cancelled: nothing left to show.
    Closed,
}

pub(crate) fn build_view_model(session: &Session) -> RenderModel {
    if session.was_cancelled() {
        return RenderModel::Closed;
    }
    match session.state() {
        SessionState::AwaitingInput(input) => RenderModel::Prompt {
            prompt: PROMPT.into(),
            buffer: input.value().to_string(),
            placeholder: input.placeholder_text().to_string(),
            cursor: input.cursor(),
            hint: HINT.into(),
        },
        SessionState::InputRejected(err) => RenderModel::Error {
            message: INPUT_ERROR.into(),
            detail: err.to_string(),
        },
        SessionState::ResultReady(allocations) => RenderModel::Table {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: allocations
                .iter()
                .map(|a| {
                    [
                        a.name().to_string(),
                        a.category.percentage.to_string(),
                        a.amount.to_string(),
                    ]
                })
                .collect(),
        },
    }
}
