use ratatui::style::{Color, Modifier, Style};

pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const HEADER_RULE: Color = Color::Indexed(182);

/// Styling handed to a presenter when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) text: Color,
    pub(crate) dim: Color,
    pub(crate) accent: Color,
    pub(crate) error: Color,
    pub(crate) border: Color,
    pub(crate) header_rule: Color,
    /// Name, Percentage, Amount.
    pub(crate) column_widths: [u16; 3],
    pub(crate) input_width: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: TEXT,
            dim: TEXT_DIM,
            accent: ACCENT,
            error: RED,
            border: OVERLAY,
            header_rule: HEADER_RULE,
            column_widths: [20, 10, 10],
            input_width: 20,
        }
    }
}

impl Theme {
    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn header_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub(crate) fn header_rule_style(&self) -> Style {
        Style::default().fg(self.header_rule)
    }

    /// Total table width including the outer border.
    pub(crate) fn table_width(&self) -> u16 {
        self.column_widths.iter().sum::<u16>() + self.column_widths.len() as u16 - 1 + 2
    }
}
