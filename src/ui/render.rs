use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::theme::Theme;
use super::util::truncate;
use super::view::RenderModel;

/// Prompt: question, blank, input line, blank, hint.
const PROMPT_HEIGHT: u16 = 5;

/// Terminal presenter. Owns its styling; the view model carries none.
pub(crate) struct TuiRenderer {
    theme: Theme,
}

impl TuiRenderer {
    pub(crate) fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Lines needed for every screen of a session over `categories` rows.
    pub(crate) fn viewport_height(&self, categories: usize) -> u16 {
        let table = u16::try_from(categories).unwrap_or(u16::MAX).saturating_add(4);
        table.max(PROMPT_HEIGHT)
    }

    pub(crate) fn draw(&self, f: &mut Frame, model: &RenderModel) {
        let area = f.area();
        match model {
            RenderModel::Prompt {
                prompt,
                buffer,
                placeholder,
                cursor,
                hint,
            } => self.render_prompt(f, area, prompt, buffer, placeholder, *cursor, hint),
            RenderModel::Error { message, detail } => self.render_error(f, area, message, detail),
            RenderModel::Table { columns, rows } => self.render_table(f, area, columns, rows),
            RenderModel::Closed => {}
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_prompt(
        &self,
        f: &mut Frame,
        area: Rect,
        prompt: &str,
        buffer: &str,
        placeholder: &str,
        cursor: usize,
        hint: &str,
    ) {
        let input = if buffer.is_empty() {
            Span::styled(placeholder, self.theme.dim_style())
        } else {
            Span::styled(buffer, self.theme.normal_style())
        };
        let lines = vec![
            Line::from(Span::styled(prompt, self.theme.prompt_style())),
            Line::from(""),
            Line::from(vec![Span::styled("> ", self.theme.prompt_style()), input]),
            Line::from(""),
            Line::from(Span::styled(hint, self.theme.dim_style())),
        ];
        f.render_widget(Paragraph::new(lines), area);

        let before: String = buffer.chars().take(cursor).collect();
        let column = Span::raw(before).width().min(usize::from(self.theme.input_width)) as u16;
        if area.width > 2 + column && area.height > 2 {
            f.set_cursor_position((area.x + 2 + column, area.y + 2));
        }
    }

    fn render_error(&self, f: &mut Frame, area: Rect, message: &str, detail: &str) {
        let lines = vec![
            Line::from(Span::styled(message, self.theme.error_style())),
            Line::from(Span::styled(detail, self.theme.dim_style())),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect, columns: &[String], rows: &[[String; 3]]) {
        let widths = self.theme.column_widths;

        let header = Row::new(
            columns
                .iter()
                .map(|c| Cell::from(c.as_str()).style(self.theme.header_style())),
        );
        let rule = Row::new(widths.map(|w| "─".repeat(usize::from(w))))
            .style(self.theme.header_rule_style());

        let body = rows.iter().map(|row| {
            Row::new(
                row.iter()
                    .zip(widths)
                    .map(|(cell, w)| Cell::from(truncate(cell, usize::from(w)))),
            )
            .style(self.theme.normal_style())
        });

        let table = Table::new(
            std::iter::once(rule).chain(body),
            widths.map(Constraint::Length),
        )
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style()),
        );

        // header + rule + rows + top/bottom border
        let height = rows.len() as u16 + 4;
        let table_area = Rect::new(area.x, area.y, self.theme.table_width(), height)
            .intersection(area);
        f.render_widget(table, table_area);
    }
}
