use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title plus the count indicator, colored by search state.
    pub fn widget(&self, count_text: &str, state: &SearchState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count_color = match state {
            SearchState::Loading { .. } => STATUS_PENDING,
            SearchState::Error { .. } => STATUS_ERROR,
            _ => STATUS_OK,
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "worksearch",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Results: ", text_style),
            Span::styled(count_text.to_string(), Style::default().fg(count_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
