use crate::ui::search::SearchState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: search status on the left, key hints, version on the right.
pub struct Footer<'a> {
    state: &'a SearchState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a SearchState) -> Self {
        Self { state }
    }

    /// Short status word for the current search state.
    pub fn status(&self) -> (&'static str, Color) {
        match self.state {
            SearchState::Idle => ("Ready", HEADER_TEXT),
            SearchState::Loading { .. } => ("Searching", STATUS_PENDING),
            SearchState::Rendered { .. } => ("Done", STATUS_OK),
            SearchState::Empty => ("No matches", STATUS_OK),
            SearchState::Error { .. } => ("Failed", STATUS_ERROR),
        }
    }

    /// Scrolling only applies while rows are shown.
    pub fn hints(&self) -> &'static str {
        match self.state {
            SearchState::Rendered { .. } => {
                "Enter: Search │ Up/Down: Scroll │ Ctrl+U: Clear │ Esc: Quit"
            }
            _ => "Enter: Search │ Ctrl+U: Clear │ Esc: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (status, status_color) = self.status();
        let status = format!(" {} │ ", status);
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators
        let used = status.chars().count() + hints.chars().count() + version.chars().count();
        let content_width = usize::from(area.width.saturating_sub(2));
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
