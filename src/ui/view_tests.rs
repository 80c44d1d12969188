#![allow(clippy::unwrap_used)]

use super::view::*;
use crate::models::Category;
use crate::session::{Session, SessionEvent};

fn session_with(input: &str) -> Session {
    let mut session = Session::default();
    session.handle(SessionEvent::Paste(input.into()));
    session
}

#[test]
fn test_prompt_model() {
    let session = session_with("12");
    assert_eq!(
        build_view_model(&session),
        RenderModel::Prompt {
            prompt: "Input income?".into(),
            buffer: "12".into(),
            placeholder: "Euro amount".into(),
            cursor: 2,
            hint: "Press 'esc' to quit".into(),
        }
    );
}

#[test]
fn test_error_model() {
    let mut session = session_with("abc");
    session.handle(SessionEvent::Submit);
    assert_eq!(
        build_view_model(&session),
        RenderModel::Error {
            message: "There was an error reading your input".into(),
            detail: "'abc' is not a whole number".into(),
        }
    );
}

#[test]
fn test_table_model() {
    let mut session = session_with("1000");
    session.handle(SessionEvent::Submit);
    let RenderModel::Table { columns, rows } = build_view_model(&session) else {
        unreachable!("expected a table");
    };
    assert_eq!(columns, ["Name", "Percentage", "Amount"]);
    assert_eq!(
        rows,
        vec![
            ["Fixed costs".to_string(), "50".into(), "500".into()],
            ["Investments".to_string(), "25".into(), "250".into()],
            ["Savings".to_string(), "10".into(), "100".into()],
            ["Guilt-free spending".to_string(), "15".into(), "150".into()],
        ]
    );
}

#[test]
fn test_table_rows_follow_category_order() {
    let mut session = Session::new(vec![Category::new("Z", 1), Category::new("A", 99)]);
    session.handle(SessionEvent::Paste("100".into()));
    session.handle(SessionEvent::Submit);
    let RenderModel::Table { rows, .. } = build_view_model(&session) else {
        unreachable!("expected a table");
    };
    let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, ["Z", "A"]);
}

#[test]
fn test_cancel_never_yields_table() {
    let mut session = session_with("1000");
    session.handle(SessionEvent::Cancel);
    session.handle(SessionEvent::Submit);
    assert_eq!(build_view_model(&session), RenderModel::Closed);
}

#[test]
fn test_build_is_pure() {
    let mut session = session_with("500");
    session.handle(SessionEvent::Submit);
    assert_eq!(build_view_model(&session), build_view_model(&session));
}
